//! Configuration loading and typed config structures for the Gudang service.
//!
//! The canonical configuration lives in `gudang-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file. Every
//! field has a default, so a missing or partial file still yields a
//! runnable configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `gudang-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GudangConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Event simulator settings.
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GudangConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(yaml)
    }

    /// Apply environment variable overrides for deployment settings.
    ///
    /// `GUDANG_HOST`, `GUDANG_PORT`, and `GUDANG_DATA_DIR` take
    /// precedence over the file. An unparseable port is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GUDANG_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("GUDANG_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("GUDANG_DATA_DIR") {
            self.storage.data_dir = val;
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory the JSON collection files live in.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Event simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulatorConfig {
    /// Milliseconds between simulated events.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Items with a quantity below this are reported as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Whether the simulator starts paused.
    #[serde(default)]
    pub start_paused: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            low_stock_threshold: default_low_stock_threshold(),
            start_paused: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
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

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    String::from("data")
}

const fn default_interval_ms() -> u64 {
    300_000
}

const fn default_low_stock_threshold() -> u32 {
    50
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_values() {
        let config = GudangConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.simulator.interval_ms, 300_000);
        assert_eq!(config.simulator.low_stock_threshold, 50);
        assert!(!config.simulator.start_paused);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = r"
simulator:
  interval_ms: 60000
server:
  port: 9090
";
        let config = GudangConfig::parse(yaml).unwrap();
        assert_eq!(config.simulator.interval_ms, 60_000);
        assert_eq!(config.simulator.low_stock_threshold, 50);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        assert!(GudangConfig::parse("simulator: [not a map").is_err());
    }
}
