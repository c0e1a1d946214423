//! Configuration management for Chargelink
//!
//! This module handles loading, validation, and management of the client
//! configuration from YAML files.

use crate::error::{ChargelinkError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_max_entries() -> usize {
    10
}

fn default_info_ttl_ms() -> u64 {
    5000
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote server connection configuration
    pub server: ServerConfig,

    /// Credential storage configuration
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Notification collection limits
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Remote server connection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the charging-reservation server, e.g. `http://localhost:8080`
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Credential storage parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Path of the JSON file holding the persisted bearer token
    pub file: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Path to log file or directory; empty disables file logging
    #[serde(default)]
    pub file: String,

    /// Number of rotated log files to keep
    pub backup_count: u32,

    /// Whether to log to console
    #[serde(default = "default_true")]
    pub console_output: bool,

    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json_format: bool,
}

/// Notification collection limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Maximum retained notifications (oldest beyond this are discarded)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Auto-expiry delay for INFO-level notifications, in milliseconds
    #[serde(default = "default_info_ttl_ms")]
    pub info_ttl_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            file: "chargelink_credentials.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: String::new(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            info_ttl_ms: default_info_ttl_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            credentials: CredentialsConfig::default(),
            logging: LoggingConfig::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults when the
    /// file does not exist
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.base_url.trim().is_empty() {
            return Err(ChargelinkError::validation(
                "server.base_url",
                "must not be empty",
            ));
        }
        if !self.server.base_url.starts_with("http://")
            && !self.server.base_url.starts_with("https://")
        {
            return Err(ChargelinkError::validation(
                "server.base_url",
                "must start with http:// or https://",
            ));
        }
        if self.server.timeout_seconds == 0 {
            return Err(ChargelinkError::validation(
                "server.timeout_seconds",
                "must be greater than zero",
            ));
        }
        if self.notifications.max_entries == 0 {
            return Err(ChargelinkError::validation(
                "notifications.max_entries",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.notifications.max_entries, 10);
        assert_eq!(config.notifications.info_ttl_ms, 5000);
    }

    #[test]
    fn rejects_empty_base_url() {
        let mut config = Config::default();
        config.server.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = Config::default();
        config.server.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::from_yaml_file("/nonexistent/chargelink.yaml").unwrap();
        assert_eq!(config.server.timeout_seconds, 10);
    }
}
