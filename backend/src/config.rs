//! Sequencer configuration
//!
//! Loaded from JSON; every field has a default, so `{}` is a valid config.
//!
//! ```json
//! {
//!   "store_path": "data/squares.json",
//!   "rng_seed": 12345,
//!   "pretty": false
//! }
//! ```

use crate::store::DEFAULT_STORE_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Where squares are stored and how colours are seeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequencerConfig {
    /// JSON file holding the sequence
    pub store_path: PathBuf,

    /// Fixed colour seed; `None` seeds from entropy
    pub rng_seed: Option<u64>,

    /// Indent the stored JSON
    pub pretty: bool,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            rng_seed: None,
            pretty: true,
        }
    }
}

impl SequencerConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SequencerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("store_path must not be empty".to_string()));
        }
        if self.store_path.is_dir() {
            return Err(ConfigError::Invalid(format!(
                "store_path {} is a directory",
                self.store_path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SequencerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SequencerConfig::default());
        assert_eq!(config.store_path, PathBuf::from("squares.json"));
        assert!(config.pretty);
    }

    #[test]
    fn test_empty_store_path_rejected() {
        let result = SequencerConfig::from_json_str(r#"{ "store_path": "" }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
