/// Application configuration
use serde::{Deserialize, Serialize};
use url::Url;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

/// Local development backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Settings passed from the host page, e.g. `{ apiBaseUrl: "https://api.example.com" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    option_env!("WISHLIST_API_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Result<AppConfig, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            url: api_base_url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        Ok(AppConfig {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Config baked in at build time through `WISHLIST_API_URL`
    pub fn from_build_env() -> Result<AppConfig, ConfigError> {
        AppConfig::new(&default_api_base_url())
    }

    /// Read a config object handed over from JavaScript. `undefined`/`null`
    /// fall back to the build-time config.
    pub fn from_js(value: JsValue) -> Result<AppConfig, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return AppConfig::from_build_env();
        }

        let raw: AppConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Js(e.to_string()))?;
        AppConfig::new(&raw.api_base_url)
    }

    /// Absolute URL for a backend path such as `/wishlist`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = AppConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_new_keeps_path_prefix() {
        let config = AppConfig::new("https://api.example.com/v1//").unwrap();
        assert_eq!(config.endpoint("/wishlist"), "https://api.example.com/v1/wishlist");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(matches!(
            AppConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_new_rejects_other_schemes() {
        assert!(matches!(
            AppConfig::new("ftp://files.example.com"),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }

    #[test]
    fn test_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint("search-games"), "http://localhost:8000/search-games");
        assert_eq!(config.endpoint("/wishlist/42"), "http://localhost:8000/wishlist/42");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let config: AppConfig =
            serde_json::from_str(r#"{"apiBaseUrl": "https://games.example.com"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://games.example.com");
    }
}
