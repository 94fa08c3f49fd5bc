//! Tasky Frontend App
//!
//! Provides the shared context and switches pages on the current route.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{Header, LoadingSpinner};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    LandingPage, LoginPage, ProfilePage, RegisterPage, TaskFormMode, TaskFormPage, TaskListPage,
};
use crate::routes::Route;
use crate::session::SessionContext;
use crate::storage::{LocalStorage, Storage};

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage: Arc<dyn Storage> = Arc::new(LocalStorage);
    let session = SessionContext::hydrate(storage.clone());
    let api = ApiClient::new(&config.api_base_url, storage);
    log::info!("API base URL: {}", api.base_url());

    let route = signal(Route::parse(&current_hash()));
    let ctx = AppContext::new(api, config, route);

    // Provide context to all children
    provide_context(ctx);
    provide_context(session);

    // Back/forward and typed URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        ctx.sync_from_hash(&current_hash());
    });

    // Profile edits must not rebuild the current page
    let authenticated = Memo::new(move |_| session.is_authenticated());
    let loading = Memo::new(move |_| session.is_loading());

    // Protected pages send signed-out users to login
    Effect::new(move |_| {
        if loading.get() {
            return;
        }
        let requested = ctx.route.get();
        let resolved = requested.resolve(authenticated.get());
        if resolved != requested {
            log::debug!("{} requires a session", requested.path());
            ctx.navigate(resolved);
        }
    });

    let page = move || {
        if loading.get() {
            return view! { <LoadingSpinner message="Checking authentication..." /> }.into_any();
        }
        match ctx.route.get().resolve(authenticated.get()) {
            Route::Landing => view! { <LandingPage /> }.into_any(),
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::Tasks(view) => view! { <TaskListPage view=view /> }.into_any(),
            Route::NewTask => view! { <TaskFormPage mode=TaskFormMode::Create /> }.into_any(),
            Route::UpdateTask(id) => {
                view! { <TaskFormPage mode=TaskFormMode::Update(id) /> }.into_any()
            }
            Route::Profile => view! { <ProfilePage /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">{page}</main>
        </div>
    }
}
