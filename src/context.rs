//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::routes::Route;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(
        api: ApiClient,
        config: AppConfig,
        route: (ReadSignal<Route>, WriteSignal<Route>),
    ) -> Self {
        Self {
            api: StoredValue::new(api),
            config: StoredValue::new(config),
            route: route.0,
            set_route: route.1,
        }
    }

    /// Cloned API client for use inside a spawned future
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn asset_url(&self, path: &str) -> String {
        self.config.with_value(|c| c.asset_url(path))
    }

    /// Switch page and mirror it into the location hash.
    pub fn navigate(&self, route: Route) {
        log::debug!("navigate to {}", route.path());
        let hash = format!("#{}", route.path());
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&hash);
        }
        self.set_route.set(route);
    }

    /// Follow a hash change made by the browser (back/forward, typed URL).
    pub fn sync_from_hash(&self, hash: &str) {
        let route = Route::parse(hash);
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
