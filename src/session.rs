//! Session Store
//!
//! The signed-in user and bearer token, mirrored to durable storage so a
//! reload keeps the session. `SessionStore` holds the logic; `SessionContext`
//! shares it with components through Leptos context.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::User;
use crate::storage::{Storage, StorageError, TOKEN_KEY, USER_KEY};

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    user: Option<User>,
    token: Option<String>,
    /// True until `hydrate` has run
    loading: bool,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            user: None,
            token: None,
            loading: true,
        }
    }

    /// Rebuild the session from durable storage. A session is restored only
    /// when both keys are present and the user parses.
    pub fn hydrate(&mut self) {
        let stored_user = self.storage.get(USER_KEY);
        let stored_token = self.storage.get(TOKEN_KEY);

        if let (Some(raw_user), Some(token)) = (stored_user, stored_token) {
            match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => {
                    log::info!("Restored session for {}", user.username);
                    self.user = Some(user);
                    self.token = Some(token);
                }
                Err(e) => {
                    log::warn!("Discarding unreadable stored session: {}", e);
                    self.clear_persisted();
                }
            }
        }
        self.loading = false;
    }

    /// Start a session. In-memory state is set even if persisting fails.
    pub fn login(&mut self, user: User, token: String) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&user).unwrap_or_default();
        self.user = Some(user);
        self.token = Some(token.clone());
        self.storage.set(USER_KEY, &serialized)?;
        self.storage.set(TOKEN_KEY, &token)
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.clear_persisted();
    }

    /// Replace the user after a profile change; the token is untouched.
    pub fn update_user(&mut self, user: User) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&user).unwrap_or_default();
        self.user = Some(user);
        self.storage.set(USER_KEY, &serialized)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn clear_persisted(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("Failed to clear {}: {}", key, e);
            }
        }
    }
}

/// Reactive handle to the session, provided once by `App`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
}

impl SessionContext {
    /// Create the store and hydrate it before anything renders.
    pub fn hydrate(storage: Arc<dyn Storage>) -> Self {
        let mut store = SessionStore::new(storage);
        store.hydrate();
        Self {
            store: RwSignal::new(store),
        }
    }

    pub fn login(&self, user: User, token: String) {
        if let Err(e) = self.store.write().login(user, token) {
            log::warn!("Session not persisted: {}", e);
        }
    }

    pub fn logout(&self) {
        self.store.write().logout();
    }

    pub fn update_user(&self, user: User) {
        if let Err(e) = self.store.write().update_user(user) {
            log::warn!("Updated user not persisted: {}", e);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.store.with(SessionStore::is_loading)
    }

    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.user().cloned())
    }
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
