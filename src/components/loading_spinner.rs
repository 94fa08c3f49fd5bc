use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner" aria-hidden="true"></span>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}
