//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/habitscope/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/habitscope/` (~/.config/habitscope/)
//! - State/Logs: `$XDG_STATE_HOME/habitscope/` (~/.local/state/habitscope/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Suggestion rule tuning
    #[serde(default)]
    pub suggestions: SuggestionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Thresholds for the suggestion rule engine.
///
/// These replace ambient test-mode switches: callers pass the configuration
/// into the engine explicitly, so two engines with different thresholds can
/// coexist in one process.
#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionConfig {
    /// Completion rate (percent) below which a habit counts as struggling
    #[serde(default = "default_low_rate_threshold")]
    pub low_rate_threshold: f64,

    /// Completion rate (percent) at or above which a weekly habit counts as
    /// consistently high
    #[serde(default = "default_high_rate_threshold")]
    pub high_rate_threshold: f64,

    /// Minimum description length (chars, after trimming) before suggesting
    /// a motivating description
    #[serde(default = "default_min_description_chars")]
    pub min_description_chars: usize,

    /// Days since creation after which a sparsely logged habit counts as stale
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: i64,

    /// Execution count below which an old habit counts as sparsely logged
    #[serde(default = "default_min_executions_for_age")]
    pub min_executions_for_age: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            low_rate_threshold: default_low_rate_threshold(),
            high_rate_threshold: default_high_rate_threshold(),
            min_description_chars: default_min_description_chars(),
            stale_after_days: default_stale_after_days(),
            min_executions_for_age: default_min_executions_for_age(),
        }
    }
}

fn default_low_rate_threshold() -> f64 {
    50.0
}

fn default_high_rate_threshold() -> f64 {
    80.0
}

fn default_min_description_chars() -> usize {
    10
}

fn default_stale_after_days() -> i64 {
    30
}

fn default_min_executions_for_age() -> usize {
    5
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/habitscope/config.toml` (~/.config/habitscope/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("habitscope").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/habitscope/` (~/.local/state/habitscope/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("habitscope")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/habitscope/habitscope.log` (~/.local/state/habitscope/habitscope.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("habitscope.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.suggestions.low_rate_threshold, 50.0);
        assert_eq!(config.suggestions.high_rate_threshold, 80.0);
        assert_eq!(config.suggestions.min_description_chars, 10);
        assert_eq!(config.suggestions.stale_after_days, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[suggestions]
low_rate_threshold = 40.0
stale_after_days = 14

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.suggestions.low_rate_threshold, 40.0);
        assert_eq!(config.suggestions.stale_after_days, 14);
        // Untouched fields keep their defaults
        assert_eq!(config.suggestions.high_rate_threshold, 80.0);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[suggestions]\nmin_description_chars = 25").unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.suggestions.min_description_chars, 25);
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();

        let result = Config::load_from(&file.path().to_path_buf());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
