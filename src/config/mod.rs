//! Configuration module
//!
//! Handles loading the optional rinkbot configuration file. Everything has
//! a built-in default, so the file (and every key in it) may be omitted;
//! command-line arguments override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::protocol::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TOKEN};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Match server connection settings
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Where and how to reach the match server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Match server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Match server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Authentication token issued for this strategy
    #[serde(default = "default_token")]
    pub token: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_token() -> String {
    DEFAULT_TOKEN.to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            token: default_token(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load_default() -> ConfigResult<Self> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("rinkbot/config.toml")),
            Some(PathBuf::from("./rinkbot.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                return Self::load(path);
            }
        }

        // No file anywhere is fine; everything has a default.
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.connection.host, DEFAULT_HOST);
        assert_eq!(config.connection.port, DEFAULT_PORT);
        assert_eq!(config.connection.token, DEFAULT_TOKEN);
        assert!(!config.log.verbose);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[connection]\nhost = \"rink.example.net\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.connection.host, "rink.example.net");
        assert_eq!(config.connection.port, DEFAULT_PORT);
        assert_eq!(config.connection.token, DEFAULT_TOKEN);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/rinkbot.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config {
            connection: ConnectionConfig {
                host: "10.0.0.7".to_string(),
                port: 31002,
                token: "abcdef".to_string(),
            },
            log: LogConfig { verbose: true },
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.connection.host, config.connection.host);
        assert_eq!(parsed.connection.port, config.connection.port);
        assert!(parsed.log.verbose);
    }
}
