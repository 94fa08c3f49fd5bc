//! Build-time Configuration
//!
//! The API base URL and log level are baked in at compile time from
//! `TASKY_API_URL` and `TASKY_LOG`.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "https://tasky-backend-1-i47u.onrender.com/api";

/// Delay before leaving a task form after a successful submit.
pub const TASK_FORM_REDIRECT_MS: u32 = 1_500;
/// Delay before leaving the register form after a successful submit.
pub const REGISTER_REDIRECT_MS: u32 = 2_000;
/// How long transient success notices stay visible.
pub const NOTICE_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every API path is appended to, without a trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TASKY_API_URL"), option_env!("TASKY_LOG"))
    }

    fn new(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self {
            api_base_url,
            log_level,
        }
    }

    /// Resolve a server-relative asset path (e.g. an avatar) against the API host.
    pub fn asset_url(&self, path: &str) -> String {
        let host = self
            .api_base_url
            .strip_suffix("/api")
            .unwrap_or(&self.api_base_url);
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", host, path)
        } else {
            format!("{}/{}", host, path)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}
