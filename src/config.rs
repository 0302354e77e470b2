//! Application Configuration
//!
//! Build-time settings for the backend connection and list geometry.

use std::time::Duration;

/// Backend used when `BACKEND_URL` is not set at build time
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Records requested per page
pub const BATCH_SIZE: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub backend_url: String,
    pub batch_size: usize,
    /// Fixed row height in px
    pub row_height: f64,
    /// Scroll viewport height in px
    pub viewport_height: f64,
    /// Extra rows rendered above and below the viewport
    pub overscan: usize,
    pub search_debounce: Duration,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            batch_size: BATCH_SIZE,
            row_height: 40.0,
            viewport_height: 600.0,
            overscan: 5,
            search_debounce: Duration::from_millis(350),
            log_level: if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info },
        }
    }
}

impl AppConfig {
    /// Build config from compile-time environment
    pub fn from_env() -> Self {
        Self::with_backend_url(option_env!("BACKEND_URL"))
    }

    pub fn with_backend_url(url: Option<&str>) -> Self {
        let backend_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();
        Self { backend_url, ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_defaults_and_trims() {
        assert_eq!(AppConfig::with_backend_url(None).backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(AppConfig::with_backend_url(Some("  ")).backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(
            AppConfig::with_backend_url(Some("https://api.example.com/")).backend_url,
            "https://api.example.com"
        );
    }
}
