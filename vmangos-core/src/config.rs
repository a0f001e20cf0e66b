//! Converter configuration.
//!
//! Every key is optional; a TOML file only needs the values it changes:
//! ```toml
//! starting_guid = 5000000
//! spawn_time_secs = "300"
//! input_encoding = "windows-1252"
//! validate_numbers = true
//! log_file = "/tmp/world-to-vmangos.log"
//! ```

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// First guid for both creature and gameobject counters.
pub const STARTING_GUID: u64 = 4_000_000;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub starting_guid: u64,
    pub spawn_time_secs: String,
    pub wander_distance: String,
    pub health_percent: String,
    pub default_map: String,
    pub input_encoding: String,
    pub validate_numbers: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            starting_guid: STARTING_GUID,
            spawn_time_secs: "1000".to_string(),
            wander_distance: "0".to_string(),
            health_percent: "100".to_string(),
            default_map: "0".to_string(),
            input_encoding: "utf-8".to_string(),
            validate_numbers: false,
            log_file: None,
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config from {:?}: {}", path, e),
            ))
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ConvertError::Config(format!("Failed to parse config TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConverterConfig::from_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.starting_guid, 4_000_000);
        assert_eq!(config.spawn_time_secs, "1000");
        assert!(!config.validate_numbers);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let toml = r#"
starting_guid = 5000000
input_encoding = "windows-1252"
log_file = "/tmp/convert.log"
"#;
        let config = ConverterConfig::from_str(toml).unwrap();
        assert_eq!(config.starting_guid, 5_000_000);
        assert_eq!(config.input_encoding, "windows-1252");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/convert.log")));
        assert_eq!(config.wander_distance, "0");
        assert_eq!(config.default_map, "0");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = ConverterConfig::from_str("starting_gid = 1");
        assert!(matches!(result, Err(ConvertError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.toml");
        std::fs::write(&path, "validate_numbers = true\n").unwrap();
        let config = ConverterConfig::from_file(&path).unwrap();
        assert!(config.validate_numbers);

        let missing = ConverterConfig::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConvertError::Io(_))));
    }
}
