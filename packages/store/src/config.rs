//! # Client configuration — `devfolio.toml`
//!
//! Defines the TOML configuration the client reads at startup
//! (filename: [`DevfolioConfig::filename`] = `"devfolio.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # backend origin, no trailing slash needed
//!
//! [storage]
//! namespace = ""                       # prefix for persisted keys, empty = none
//! ```
//!
//! ## Resolution order
//!
//! 1. Built-in defaults ([`DevfolioConfig::default`]).
//! 2. `devfolio.toml` in the working directory (native only).
//! 3. The `DEVFOLIO_API_URL` environment variable. Natively it is read at
//!    runtime (a `.env` file is honoured via `dotenvy`); on wasm it is baked in
//!    at compile time with `option_env!`.
//!
//! All structs derive `Default` so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "DEVFOLIO_API_URL";

/// Top-level configuration stored in `devfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DevfolioConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP origin of the backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Persistence settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix for the persisted `token` / `user` keys.
    #[serde(default)]
    pub namespace: String,
}

impl DevfolioConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            storage: StorageConfig::default(),
        }
    }

    /// Builder method to set the storage namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage.namespace = namespace.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "devfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply an API URL override. Blank values are ignored.
    pub fn with_api_url_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Resolve the effective configuration for this platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let from_file = std::fs::read_to_string(Self::filename())
            .ok()
            .and_then(|raw| match Self::from_toml(&raw) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring invalid {}: {e}", Self::filename());
                    None
                }
            })
            .unwrap_or_default();

        let env_url = std::env::var(API_URL_ENV).ok();
        from_file.with_api_url_override(env_url.as_deref())
    }

    /// Resolve the effective configuration for this platform.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default().with_api_url_override(option_env!("DEVFOLIO_API_URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DevfolioConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.storage.namespace, "");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = DevfolioConfig::from_toml("").unwrap();
        assert_eq!(config, DevfolioConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = DevfolioConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.devfolio.test"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.devfolio.test");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DevfolioConfig::new("https://example.test").with_namespace("staging");
        let raw = config.to_toml().unwrap();
        assert_eq!(DevfolioConfig::from_toml(&raw).unwrap(), config);
    }

    #[test]
    fn test_api_url_override() {
        let config = DevfolioConfig::default().with_api_url_override(Some(" https://x.test "));
        assert_eq!(config.api.base_url, "https://x.test");

        let config = DevfolioConfig::default().with_api_url_override(Some("   "));
        assert_eq!(config.api.base_url, "http://localhost:8080");

        let config = DevfolioConfig::default().with_api_url_override(None);
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }
}
