//! Client configuration
//!
//! The defaults are embedded in the bundle. A hosting page may override them
//! by defining `window.SMARTPOS_CONFIG` (TOML text) before the wasm module
//! starts.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base URL; when absent the base is derived from the page location
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
    /// Upper bound for a single request; 0 disables the bound
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8000
timeout_ms = 15000

[display]
currency_symbol = "₹"
"#;

const OVERRIDE_GLOBAL: &str = "SMARTPOS_CONFIG";

pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load configuration
///
/// Search order:
/// 1. `window.SMARTPOS_CONFIG`, if it is a string that parses
/// 2. The embedded default
pub fn load_config() -> Result<Config, ConfigError> {
    if let Some(text) = read_override() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded configuration from window.{}", OVERRIDE_GLOBAL);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring window.{}: {}", OVERRIDE_GLOBAL, e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn read_override() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(OVERRIDE_GLOBAL))
        .ok()?
        .as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.timeout_ms, 15000);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.display.currency_symbol, "₹");
    }

    #[test]
    fn test_display_section_is_optional() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://pos.example.com/api"
            port = 443
            timeout_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://pos.example.com/api")
        );
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_missing_api_section_is_an_error() {
        assert!(parse_config("[display]\ncurrency_symbol = \"$\"").is_err());
    }
}
