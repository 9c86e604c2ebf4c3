//! Application configuration
//!
//! Configuration loaded from a .dbdump-console.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .dbdump-console.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the backend service
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Default file path offered when triggering a restore
    #[serde(default)]
    pub default_restore_file: Option<String>,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
            default_restore_file: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.default_restore_file.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            backend_url = "http://db-admin.internal:9000"
            request_timeout_secs = 10
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.backend_url, "http://db-admin.internal:9000");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            backend_url = "http://127.0.0.1:8080"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.backend_url, "http://127.0.0.1:8080");
        // Other fields should use defaults
        assert_eq!(config.request_timeout_secs, 30);
    }
}
