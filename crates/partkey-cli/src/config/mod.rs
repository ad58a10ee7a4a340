//! Configuration management.
//!
//! Node coordinates and defaults only; the account mnemonic deliberately
//! has no place here.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// algod base URL.
    pub node_url: Option<String>,

    /// algod admin API token.
    pub token: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("is", "8b", "partkey")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing_set() {
        let config = Config::default();
        assert!(config.node_url.is_none());
        assert!(config.token.is_none());
        assert!(config.output_format.is_none());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            node_url: Some("http://localhost:8080".to_string()),
            token: Some("secret".to_string()),
            output_format: Some(OutputFormat::Json),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.node_url, config.node_url);
        assert_eq!(parsed.output_format, Some(OutputFormat::Json));
    }
}
