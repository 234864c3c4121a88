//! Configuration loading and typed config structures for the server.
//!
//! The canonical configuration lives in `precinct-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file and
//! applies environment overrides. Every field has a default, so a
//! missing file yields a fully-working demo configuration.

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

/// Top-level server configuration.
///
/// Mirrors the structure of `precinct-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Network settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Demo data seeding settings.
    #[serde(default)]
    pub seed: SeedSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for network settings:
    /// - `PRECINCT_HOST` overrides `server.host`
    /// - `PRECINCT_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// Network settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSection {
    /// Apply `PRECINCT_HOST` / `PRECINCT_PORT` environment overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("PRECINCT_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("PRECINCT_PORT")
            && let Ok(port) = port.parse()
        {
            self.port = port;
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Demo data seeding settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedSection {
    /// Whether to seed the fixed demo data set on startup.
    #[serde(default = "default_true")]
    pub demo_data: bool,
    /// Fixed seed for the store's random source. Unset draws from
    /// entropy; set it for repeatable demo values.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SeedSection {
    fn default() -> Self {
        Self {
            demo_data: true,
            rng_seed: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Default tracing filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

const fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = AppConfig::parse("{}").ok();
        assert_eq!(
            config.as_ref().map(|c| c.server.port),
            Some(default_port())
        );
        assert_eq!(config.map(|c| c.seed.demo_data), Some(true));
    }

    #[test]
    fn yaml_values_override_defaults() {
        let yaml = "
server:
  port: 8080
seed:
  demo_data: false
  rng_seed: 42
";
        let config = AppConfig::parse(yaml).ok();
        assert_eq!(config.as_ref().map(|c| c.server.port), Some(8080));
        assert_eq!(config.as_ref().map(|c| c.seed.demo_data), Some(false));
        assert_eq!(config.and_then(|c| c.seed.rng_seed), Some(42));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let parsed = AppConfig::parse("server: [not, a, map]");
        assert!(parsed.is_err());
    }
}
