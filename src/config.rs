//! Configuration module for the portal.

use serde::Deserialize;
use std::path::Path;

use crate::{PortalError, Result};

/// Minimum length of the session signing secret, in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under /assets.
    #[serde(default = "default_assets_path")]
    pub assets_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_assets_path() -> String {
    "assets".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_path: default_assets_path(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/portal.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret used to derive the cookie signing key.
    ///
    /// Must be at least [`MIN_SECRET_LENGTH`] bytes. The default is for
    /// development only; production deployments must override it.
    #[serde(default = "default_session_secret")]
    pub secret: String,
}

fn default_session_secret() -> String {
    "portal-dev-secret-change-me-0123456789abcdef0123456789abcdef".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: default_session_secret(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/portal.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file, then apply environment
    /// overrides (`PORTAL_DB_PATH`, `PORTAL_SESSION_SECRET`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PortalError::Config(format!("failed to read config file: {e}")))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| PortalError::Config(format!("failed to parse config file: {e}")))?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var("PORTAL_DB_PATH") {
            self.database.path = path;
        }
        if let Ok(secret) = std::env::var("PORTAL_SESSION_SECRET") {
            self.session.secret = secret;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.session.secret.len() < MIN_SECRET_LENGTH {
            return Err(PortalError::Config(format!(
                "session secret must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "data/portal.db");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [database]
            path = "/tmp/test.db"

            [session]
            secret = "0123456789abcdef0123456789abcdef"

            [logging]
            level = "debug"
            file = "/tmp/test.log"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.path, "/tmp/test.db");
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let toml = r#"
            [server]
            port = 3000
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, "data/portal.db");
    }

    #[test]
    fn test_short_secret_rejected() {
        let toml = r#"
            [session]
            secret = "too-short"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let result = config.validate();
        assert!(matches!(result, Err(PortalError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("PORTAL_DB_PATH", "/tmp/env-override.db");
        let mut config = Config::default();
        config.apply_env();
        assert_eq!(config.database.path, "/tmp/env-override.db");
        std::env::remove_var("PORTAL_DB_PATH");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/config.toml");
        assert!(matches!(result, Err(PortalError::Config(_))));
    }
}
