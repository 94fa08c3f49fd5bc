//! Task API Client
//!
//! HTTP bindings to the remote task API, organized by resource.

mod auth;
mod task;
mod user;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::storage::{Storage, TOKEN_KEY};

// Re-export all public items
pub use auth::*;
pub use task::*;
pub use user::*;

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'`')
    .add(b'<')
    .add(b'>');

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// The server's own message when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        ApiError::Status { status, message }
    }
}

/// Client for the task API.
///
/// The bearer token is read from durable storage at request time, so a
/// login or logout takes effect on the very next request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    storage: Arc<dyn Storage>,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>, storage: Arc<dyn Storage>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.as_ref().trim_end_matches('/')),
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request carrying the persisted bearer token, if any.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.public_request(method, path);
        match self.storage.get(TOKEN_KEY) {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    /// Request sent without credentials (register, login).
    fn public_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    async fn execute(&self, builder: RequestBuilder) -> ApiResult<String> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().path().to_string();
        log::debug!("{} {}", method, url);

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::warn!("{} {} -> {}", method, url, status);
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let body = self.execute(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request whose response body is not needed.
    async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.execute(builder).await.map(|_| ())
    }
}

pub(crate) fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}
