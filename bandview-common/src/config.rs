//! Configuration resolution
//!
//! Settings resolve in priority order: command-line argument (clap
//! folds the environment variables in), TOML config file, compiled
//! default.

use std::path::Path;

use crate::{Error, Result};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM: &str = "https://groupietrackers.herokuapp.com/api";

/// Effective service settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub upstream_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_UPSTREAM.to_string(),
        }
    }
}

impl Config {
    /// Resolve effective settings from command-line values, an optional
    /// TOML config file, and compiled defaults.
    pub fn resolve(
        cli_port: Option<u16>,
        cli_upstream: Option<String>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };

        Ok(Self {
            port: cli_port.unwrap_or(file.port),
            upstream_base_url: cli_upstream.unwrap_or(file.upstream_base_url),
        })
    }

    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let value: toml::Value = text
            .parse()
            .map_err(|e| Error::Config(format!("invalid TOML: {}", e)))?;

        let defaults = Self::default();
        let port = value
            .get("port")
            .and_then(|v| v.as_integer())
            .map(|p| p as u16)
            .unwrap_or(defaults.port);
        let upstream_base_url = value
            .get("upstream_base_url")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or(defaults.upstream_base_url);

        Ok(Self {
            port,
            upstream_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_supplied() {
        let config = Config::resolve(None, None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn cli_values_override_defaults() {
        let config = Config::resolve(
            Some(9000),
            Some("http://localhost:1234/api".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.upstream_base_url, "http://localhost:1234/api");
    }

    #[test]
    fn toml_fills_unset_values() {
        let file = Config::from_toml_str(
            "port = 8080\nupstream_base_url = \"http://mirror.test/api\"\n",
        )
        .unwrap();
        assert_eq!(file.port, 8080);
        assert_eq!(file.upstream_base_url, "http://mirror.test/api");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let file = Config::from_toml_str("port = 8080\n").unwrap();
        assert_eq!(file.port, 8080);
        assert_eq!(file.upstream_base_url, DEFAULT_UPSTREAM);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = Config::from_toml_str("port = = 8080").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
