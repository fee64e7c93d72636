//! Configuration for docfox

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Apifox API origin
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value for the X-Apifox-Api-Version header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Default project ID for the CLI `upload` command
    #[serde(default)]
    pub project_id: Option<String>,

    /// Default access token for the CLI `upload` command
    #[serde(default)]
    pub access_token: Option<String>,

    /// Port for the HTTP (streamable MCP) transport
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            project_id: None,
            access_token: None,
            http_port: default_http_port(),
        }
    }
}

impl Config {
    /// Load config from the default location or fall back to defaults
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Config::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The default config path: ~/.docfox/config.toml
    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".docfox").join("config.toml"))
    }

    /// Apply environment variable overrides on top of file values
    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DOCFOX_BASE_URL") {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(version) = std::env::var("DOCFOX_API_VERSION") {
            if !version.is_empty() {
                self.api_version = version;
            }
        }
        if let Ok(project_id) = std::env::var("APIFOX_PROJECT_ID") {
            if !project_id.is_empty() {
                self.project_id = Some(project_id);
            }
        }
        if let Ok(token) = std::env::var("APIFOX_ACCESS_TOKEN") {
            if !token.is_empty() {
                self.access_token = Some(token);
            }
        }
        self
    }
}

// Default value functions

fn default_base_url() -> String {
    "https://api.apifox.com".to_string()
}

fn default_api_version() -> String {
    "2024-03-28".to_string()
}

fn default_http_port() -> u16 {
    3941
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.apifox.com");
        assert_eq!(config.api_version, "2024-03-28");
        assert_eq!(config.http_port, 3941);
        assert!(config.project_id.is_none());
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
base_url = "https://apifox.internal.example.com"
project_id = "12345"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://apifox.internal.example.com");
        assert_eq!(config.project_id.as_deref(), Some("12345"));
        // Unspecified fields keep their defaults
        assert_eq!(config.api_version, "2024-03-28");
        assert_eq!(config.http_port, 3941);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(Config::load_from(&path).is_err());
    }
}
