// In: src/config.rs

//! The single source of truth for easy-compress runtime configuration.
//!
//! `EasyCompressConfig` is created once at the application boundary (typically
//! from a JSON file) and handed to `CompressionSession::new`. Every field has a
//! serde default, so an empty JSON object is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EasyCompressError, Result};

/// Runtime configuration for a `CompressionSession`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EasyCompressConfig {
    /// The ratio/speed trade-off used when a caller does not supply one.
    #[serde(default = "default_alpha")]
    pub default_alpha: f64,

    /// A JSON metrics catalog to use instead of the compiled-in benchmark table.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Where profiles are loaded from at startup and saved to by `save_profiles`.
    #[serde(default)]
    pub profiles_path: Option<PathBuf>,

    /// If true, the session installs an `info`-level logger on creation.
    #[serde(default)]
    pub verbose_logging: bool,

    /// Log destination for `verbose_logging`. Defaults to stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for EasyCompressConfig {
    fn default() -> Self {
        Self {
            default_alpha: default_alpha(),
            catalog_path: None,
            profiles_path: None,
            verbose_logging: false,
            log_file: None,
        }
    }
}

/// Helper for `serde` to provide a default for `default_alpha`.
fn default_alpha() -> f64 {
    0.5
}

impl EasyCompressConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.default_alpha) {
            return Err(EasyCompressError::InvalidConfig(format!(
                "default_alpha must lie within [0, 1], got {}",
                self.default_alpha
            )));
        }
        if self.log_file.is_some() && !self.verbose_logging {
            log::warn!("log_file is set but verbose_logging is off; no log will be written");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = EasyCompressConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EasyCompressConfig::default());
        assert_eq!(config.default_alpha, 0.5);
    }

    #[test]
    fn test_fields_are_snake_case() {
        let config = EasyCompressConfig::from_json_str(
            r#"{"default_alpha": 0.9, "profiles_path": "/tmp/p.csv", "verbose_logging": true}"#,
        )
        .unwrap();
        assert_eq!(config.default_alpha, 0.9);
        assert_eq!(config.profiles_path, Some(PathBuf::from("/tmp/p.csv")));
        assert!(config.verbose_logging);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_out_of_range_alpha_is_invalid() {
        let result = EasyCompressConfig::from_json_str(r#"{"default_alpha": 2.0}"#);
        assert!(matches!(result, Err(EasyCompressError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json_is_a_serde_error() {
        let result = EasyCompressConfig::from_json_str(r#"{"default_alpha": "high"}"#);
        assert!(matches!(result, Err(EasyCompressError::SerdeJson(_))));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_alpha": 0.25}"#).unwrap();
        assert_eq!(EasyCompressConfig::from_json_file(&path).unwrap().default_alpha, 0.25);
    }
}
