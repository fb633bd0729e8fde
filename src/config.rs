//! Configuration management for the atelier TUI.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages file locations, logging and the page shown at startup.

use crate::app::Page;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "atelier-tui";

/// Application configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page shown at startup
    pub start_page: Page,
    /// Snapshot file (relative to config dir or absolute)
    pub data_path: String,
    /// Save the snapshot when quitting
    pub autosave: bool,
    /// Client export file (relative to config dir or absolute)
    pub export_path: String,
    /// Log file (relative to config dir or absolute)
    pub log_path: String,
    /// Log level: off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_page: Page::Dashboard,
            data_path: "data.json".to_string(),
            autosave: false,
            export_path: "clients.csv".to_string(),
            log_path: "atelier-tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/atelier-tui/config.jsonc`
    /// 3. `~/.config/atelier-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/atelier-tui/config.jsonc` or
    ///   `~/.config/atelier-tui/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    pub fn data_file_path(&self) -> Result<PathBuf> {
        resolve(&self.data_path)
    }

    pub fn export_file_path(&self) -> Result<PathBuf> {
        resolve(&self.export_path)
    }

    pub fn log_file_path(&self) -> Result<PathBuf> {
        resolve(&self.log_path)
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let config_dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(config_dir.join(APP_DIR))
}

/// Absolute paths are kept; relative ones live under the config directory.
fn resolve(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(app_config_dir()?.join(path))
    }
}

/// Remove `//` comments outside of strings, line by line.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match comment_start(line) {
            Some(pos) => line[..pos].trim_end(),
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte offset of the first `//` that is not inside a string literal.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.start_page, Page::Dashboard);
        assert!(!config.autosave);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let config = Config {
            start_page: Page::Production,
            autosave: true,
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Page shown at startup
            "start_page": "orders",
            "export_path": "/tmp/export//clients.csv", // trailing comment
            "log_level": "debug"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.start_page, Page::Orders);
        assert_eq!(loaded.export_path, "/tmp/export//clients.csv");
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.data_path, "data.json");
    }

    #[test]
    fn test_missing_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("none.jsonc"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = Config {
            data_path: "/var/lib/atelier/data.json".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.data_file_path().unwrap(),
            PathBuf::from("/var/lib/atelier/data.json")
        );
    }
}
