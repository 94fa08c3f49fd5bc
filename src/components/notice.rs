//! Notice Banners
//!
//! Dismissible error and success messages shown at the top of a page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTICE_DISMISS_MS;

/// Error and success message slots owned by one page
#[derive(Clone, Copy)]
pub struct Notice {
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl Notice {
    pub fn new() -> Self {
        Self {
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.success.set(None);
        self.error.set(Some(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.error.set(None);
        self.success.set(Some(message.into()));
    }

    /// Success message that hides itself after a few seconds.
    pub fn flash_success(&self, message: impl Into<String>) {
        let message = message.into();
        self.success(message.clone());
        let success = self.success;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            // Leave a newer message alone
            if success.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                success.try_set(None);
            }
        });
    }

    /// Called as the user edits a form
    pub fn clear(&self) {
        if self.error.get_untracked().is_some() {
            self.error.set(None);
        }
        if self.success.get_untracked().is_some() {
            self.success.set(None);
        }
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    view! {
        {move || notice.error.get().map(|message| view! {
            <div class="alert alert-error" role="alert">
                <strong class="alert-title">"Error"</strong>
                <span class="alert-message">{message}</span>
                <button class="alert-close" aria-label="close" on:click=move |_| notice.error.set(None)>
                    "×"
                </button>
            </div>
        })}
        {move || notice.success.get().map(|message| view! {
            <div class="alert alert-success" role="status">
                <strong class="alert-title">"Success"</strong>
                <span class="alert-message">{message}</span>
                <button class="alert-close" aria-label="close" on:click=move |_| notice.success.set(None)>
                    "×"
                </button>
            </div>
        })}
    }
}
