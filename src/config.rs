//! Skillfeed configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main skillfeed configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillfeedConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Challenge catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Persistence configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = any)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8460,
            cors_origins: Vec::new(),
        }
    }
}

/// Challenge catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with challenge definitions; the builtin demo set is used
    /// when unset
    pub path: Option<PathBuf>,
}

/// Persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Disable to run without persistence; submit/compare/progress answer 503
    pub enabled: bool,

    /// Base directory for the file-backed store (default: ~/.skillfeed/data)
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            data_dir: None,
        }
    }
}

impl SkillfeedConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            crate::error::Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SkillfeedConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8460);
        assert!(config.server.cors_origins.is_empty());
        assert!(config.catalog.path.is_none());
        assert!(config.storage.enabled);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = SkillfeedConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: SkillfeedConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.storage.enabled, config.storage.enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: SkillfeedConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [storage]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 9000);
        assert!(!parsed.storage.enabled);
        assert!(parsed.catalog.path.is_none());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nhost = \"::1\"\nport = 7000\n").unwrap();

        let config = SkillfeedConfig::from_file(&path).unwrap();
        assert_eq!(config.server.host, "::1");
        assert_eq!(config.server.port, 7000);

        assert!(SkillfeedConfig::from_file(std::path::Path::new("/nope.toml")).is_err());
    }
}
