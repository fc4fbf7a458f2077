//! Calculator configuration loaded from TOML.
//!
//! Looked up at `$XDG_CONFIG_HOME/calcpad/config.toml` unless a path is
//! given explicitly. A missing default file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{DEFAULT_DISPLAY_WIDTH, ERROR_TEXT, UNDEFINED_TEXT};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Treat an empty operand before an operator or `=` as an error
    /// instead of as 0.
    pub strict_operands: bool,
    /// Characters that fit on screen. Longer text shows "Error".
    pub display_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_operands: false,
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

impl Config {
    /// Get the default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The screen must fit the "Undefined" marker.
    pub fn validate(&self) -> Result<()> {
        let minimum = ERROR_TEXT.len().max(UNDEFINED_TEXT.len());
        if self.display_width < minimum {
            anyhow::bail!(
                "display_width must be at least {}, got {}",
                minimum,
                self.display_width
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::default().display_width, 9);
        assert!(!Config::default().strict_operands);
    }

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml("strict_operands = true\ndisplay_width = 12\n").unwrap();
        assert!(config.strict_operands);
        assert_eq!(config.display_width, 12);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml("precision = 4").is_err());
    }

    #[test]
    fn test_narrow_display_rejected() {
        assert!(Config::from_toml("display_width = 4").is_err());
        assert!(Config::from_toml("display_width = 9").is_ok());
    }

    #[test]
    fn test_load_explicit_path() {
        let path = std::env::temp_dir().join(format!("calcpad-config-{}.toml", std::process::id()));
        fs::write(&path, "display_width = 10\n").unwrap();
        let loaded = Config::load(Some(path.as_path()));
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().display_width, 10);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = std::env::temp_dir().join("calcpad-config-does-not-exist.toml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }
}
