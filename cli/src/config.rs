//! Rendering-service configuration resolved from CLI flags and environment.

use std::time::Duration;

use crate::CliError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ServiceTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

impl ServiceTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service root without a trailing slash.
    pub base_url: String,
    pub timeouts: ServiceTimeouts,
}

impl ServiceConfig {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidBaseUrl`] unless the URL is `http://` or `https://`
    /// with a non-empty host.
    pub fn new(base_url: &str, timeouts: ServiceTimeouts) -> Result<Self, CliError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if host.is_empty() {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned(), timeouts })
    }

    /// Absolute URL for an endpoint path (`/upload_csv`) or a service-relative
    /// reference returned by the service (`/static/previews/a.png`).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
