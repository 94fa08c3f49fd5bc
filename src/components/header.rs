//! Header Component
//!
//! Top navigation bar. Shows task views and the profile menu when signed in,
//! login/register links otherwise.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app;
use crate::reconcile::ListView;
use crate::routes::Route;
use crate::session::use_session;

const NAV_ITEMS: &[(&str, ListView)] = &[
    ("Tasks", ListView::Active),
    ("Completed", ListView::Completed),
    ("Trash", ListView::Trash),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();

    let logout = move |_| {
        let request = api::logout(&ctx.api());
        session.logout();
        ctx.navigate(Route::Landing);
        spawn_local(async move {
            if let Err(e) = request.await {
                log::warn!("Server logout failed: {}", e);
            }
        });
    };

    let nav_links = move || {
        NAV_ITEMS
            .iter()
            .map(|(label, view)| {
                let route = Route::Tasks(*view);
                let target = route.clone();
                let is_active = move || ctx.route.get() == route;
                view! {
                    <button
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        on:click=move |_| ctx.navigate(target.clone())
                    >
                        {*label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="app-header">
            <button class="brand" on:click=move |_| ctx.navigate(Route::Landing)>
                "Tasky"
            </button>
            <Show
                when=move || session.is_authenticated()
                fallback=move || view! {
                    <nav class="nav">
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::Login)>
                            "Login"
                        </button>
                        <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Register)>
                            "Get Started"
                        </button>
                    </nav>
                }
            >
                <nav class="nav">
                    {nav_links}
                    <button class="nav-link" on:click=move |_| ctx.navigate(Route::Profile)>
                        {move || session.user().map(|u| u.full_name()).unwrap_or_default()}
                    </button>
                    <button class="nav-link" on:click=logout>
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
