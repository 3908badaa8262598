//! Configuration file loading.
//!
//! The file is TOML:
//!
//! ```toml
//! [display]
//! # Separator between thousands; "" turns grouping off.
//! group_separator = ","
//! ```

use crate::core::DisplayFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Settings read from `config.toml`; every section is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

/// The `[display]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Thousands separator; empty disables grouping.
    pub group_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `abacus/config.toml` under `dirs::config_dir()`, falling back to
    /// the current directory when there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("abacus").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// The separator must be empty or a single character that cannot be
    /// confused with operand text (digits, `.` or `-`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let separator = &self.display.group_separator;
        let mut chars = separator.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(()),
            (Some(c), None) if !(c.is_ascii_digit() || c == '.' || c == '-') => Ok(()),
            _ => Err(ConfigError::ValidationError {
                message: format!(
                    "group_separator must be empty or one character other than a digit, '.' or '-', got '{separator}'"
                ),
            }),
        }
    }

    /// The display formatting hook this configuration selects.
    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            group_separator: self.display.group_separator.chars().next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display_format(), DisplayFormat::default());
    }

    #[test]
    fn separator_is_read_from_file() {
        let file = write_config("[display]\ngroup_separator = \" \"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.display_format().group_separator, Some(' '));
    }

    #[test]
    fn empty_separator_disables_grouping() {
        let file = write_config("[display]\ngroup_separator = \"\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.display_format().group_separator, None);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let file = write_config("[display\n");
        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn confusable_separators_are_rejected() {
        for bad in ["7", ".", "-", ",,"] {
            let config = Config {
                display: DisplayConfig {
                    group_separator: bad.to_string(),
                },
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
                "separator {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn config_path_ends_with_crate_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("abacus/config.toml"));
    }
}
