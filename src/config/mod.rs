//! Configuration system for cardquill.
//!
//! Settings are read from `~/.config/cardquill/config.toml`. A missing or
//! unreadable file yields the defaults; command-line arguments override
//! whatever the file says.
//!
//! # Example
//!
//! ```
//! use cardquill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.default_database, "test_simulation.db");
//!
//! let custom = Config {
//!     review_mode: true,
//!     ..Config::default()
//! };
//! assert!(custom.review_mode);
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the cardquill application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `default_database` - Database opened when none is given (default: "test_simulation.db")
/// * `review_mode` - Start with answers hidden (default: false)
/// * `pasted_image_name` - File name for pasted images (default: "pasted_image.png")
/// * `log_file` - Where log output goes (default: data dir `cardquill/cardquill.log`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Database file opened at startup when no path is given
    #[serde(default = "default_database")]
    pub default_database: String,

    /// Start in review mode
    #[serde(default)]
    pub review_mode: bool,

    /// File name written when pasting an image
    #[serde(default = "default_pasted_image_name")]
    pub pasted_image_name: String,

    /// Log file path; `None` uses the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_database() -> String {
    "test_simulation.db".to_string()
}

fn default_pasted_image_name() -> String {
    crate::editor::state::DEFAULT_PASTED_IMAGE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_database: default_database(),
            review_mode: false,
            pasted_image_name: default_pasted_image_name(),
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/cardquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("cardquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Resolved log file location.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_dir().map(|mut path| {
                path.push("cardquill");
                path.push("cardquill.log");
                path
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("review_mode = true").unwrap();
        assert!(config.review_mode);
        assert_eq!(config.theme, "default-dark");
        assert_eq!(config.pasted_image_name, "pasted_image.png");
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/cq.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/cq.log")));
    }
}
