//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// An explicit `api.base_url` wins. Otherwise the base is built from the
/// current window location and the configured backend port, e.g.
/// "http://localhost:8000". Outside a browser the host falls back to
/// 127.0.0.1.
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base) = config.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
        return base.trim().trim_end_matches('/').to_string();
    }

    let (protocol, hostname) = match web_sys::window() {
        Some(window) => {
            let location = window.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    base_url(&protocol, &hostname, config.port)
}

/// Format `{protocol}//{hostname}:{port}`
pub fn base_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Join a base URL and an API path ("/products/list")
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("https:", "pos.local", 8000), "https://pos.local:8000");
    }

    #[test]
    fn test_api_url_joins_slashes() {
        assert_eq!(
            api_url("http://127.0.0.1:8000/", "/products/list"),
            "http://127.0.0.1:8000/products/list"
        );
        assert_eq!(
            api_url("http://127.0.0.1:8000", "billing/create"),
            "http://127.0.0.1:8000/billing/create"
        );
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = ApiConfig {
            base_url: Some("https://pos.example.com/api/".into()),
            port: 8000,
            timeout_ms: 1000,
        };
        assert_eq!(api_base(&config), "https://pos.example.com/api");
    }
}
