//! Configuration management.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use ipwho_core::IpwhoError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputMode;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "IPWHO_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API base URL.
    pub api_url: Option<String>,

    /// Output mode used when neither --verbose nor --json is passed.
    pub output_mode: Option<OutputMode>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("com", "extractip", "ipwho")
            .ok_or_else(|| IpwhoError::Config("could not determine config directory".into()))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| IpwhoError::Config(format!("{}: {e}", path.display())))?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }

    /// Set a value by key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => self.api_url = Some(value.to_string()),
            "output_mode" => self.output_mode = Some(value.parse()?),
            _ => {
                return Err(IpwhoError::Config(format!(
                    "unknown key: {key}\nValid keys: api_url, output_mode"
                ))
                .into())
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("api_url", "http://localhost:8080").unwrap();
        config.set("output_mode", "json").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(loaded.output_mode, Some(OutputMode::Json));
    }

    #[test]
    fn test_parse_file() {
        let config: Config = toml::from_str("output_mode = \"table\"\n").unwrap();
        assert_eq!(config.output_mode, Some(OutputMode::Table));
        assert_eq!(config.api_url, None);
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_mode = \"yaml\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("configuration error:"));
    }

    #[test]
    fn test_set_rejects_unknown_key_and_value() {
        let mut config = Config::default();
        assert!(config.set("api_key", "secret").is_err());
        assert!(config.set("output_mode", "csv").is_err());
        assert_eq!(config, Config::default());
    }
}
