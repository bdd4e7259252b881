use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/storefront.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Bounded channel capacity of each actor.
    pub mailbox_size: usize,
    /// Load the sample catalog on start.
    pub seed_catalog: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            mailbox_size: 100,
            seed_catalog: true,
        }
    }
}

impl StoreConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_size == 0 {
            return Err(ConfigError::Invalid("mailbox_size must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Loads `path` when it exists, the defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = StoreConfig::from_yaml("seed_catalog: false\n").unwrap();
        assert!(!config.seed_catalog);
        assert_eq!(config.mailbox_size, 100);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_zero_mailbox_rejected() {
        let result = StoreConfig::from_yaml("mailbox_size: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unreadable_yaml() {
        assert!(matches!(StoreConfig::from_yaml("mailbox_size: [1"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_absent_file_uses_defaults() {
        let config = StoreConfig::load_or_default("does/not/exist.yaml").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(matches!(StoreConfig::load("does/not/exist.yaml"), Err(ConfigError::Read { .. })));
    }
}
