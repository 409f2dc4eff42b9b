use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file:
    /// `<config_dir>/portfolio-core/config.toml`, falling back to the
    /// current directory when no platform config directory exists.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("portfolio-core").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; read, parse, and
    /// validation failures are errors.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint =
            Url::parse(&self.relay.endpoint).map_err(|_| ConfigError::ValidationError {
                message: format!("relay endpoint '{}' is not a valid URL", self.relay.endpoint),
            })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "relay endpoint '{}' must use http or https",
                    self.relay.endpoint
                ),
            });
        }

        if self.relay.fallback_contact.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "fallback contact address must not be empty".to_string(),
            });
        }

        if self.relay.timeout_seconds == 0 || self.relay.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "relay timeouts must be non-zero".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.animation.threshold_ratio) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "animation threshold ratio {} is outside [0, 1]",
                    self.animation.threshold_ratio
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn default_threshold_is_point_one() {
        let config = Config::default();
        assert_eq!(config.animation.threshold_ratio, 0.1);
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let mut config = Config::default();
        config.relay.endpoint = "ftp://example.com/form".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn garbage_endpoint_is_rejected() {
        let mut config = Config::default();
        config.relay.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut config = Config::default();
        config.animation.threshold_ratio = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.relay.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_fallback_contact_is_rejected() {
        let mut config = Config::default();
        config.relay.fallback_contact.clear();
        assert!(config.validate().is_err());
    }
}
