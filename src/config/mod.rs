//! Configuration for the transcoder tool.
//!
//! Settings are loaded from an optional TOML file and overridden by
//! `SHRTND_*` environment variables. A missing default file is not an error;
//! the tool degrades to built-in defaults.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::codec::DEFAULT_STRIP;
use crate::error::config::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "SHRTND";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ValidationError`] describing the first invalid value.
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the transcoder tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Characters stripped from words during encoding.
    pub strip: String,

    /// Word list loaded into the dictionary at startup.
    pub dictionary: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strip: DEFAULT_STRIP.to_owned(),
            dictionary: None,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.strip.is_empty() {
            return Err(ConfigError::ValidationError(
                "strip set may not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Loads [`AppConfig`] from an optional file plus environment overrides.
#[derive(Debug)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a loader for the given file path and environment prefix.
    pub fn new(path: Option<PathBuf>, env_prefix: &str) -> Self {
        Self {
            path,
            env_prefix: env_prefix.to_owned(),
        }
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::FileNotFound`] when a configured file is missing.
    /// * [`ConfigError::ParseError`] when the file or environment cannot be
    ///   parsed into an [`AppConfig`].
    /// * [`ConfigError::ValidationError`] when the resulting values are
    ///   invalid.
    pub fn load(&self) -> ConfigResult<AppConfig> {
        let mut builder = Config::builder();

        if let Some(path) = &self.path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            builder = builder.add_source(File::from(path.clone()));
        }

        let settings = builder
            .add_source(Environment::with_prefix(&self.env_prefix))
            .build()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let app_config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        app_config.validate()?;
        Ok(app_config)
    }
}

/// Loads the configuration from `path`, or from the default location.
///
/// With no explicit path, a missing `config/default.toml` falls back to the
/// built-in defaults; an explicit path that does not exist is an error.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load_config(path: Option<PathBuf>) -> ConfigResult<AppConfig> {
    match path {
        Some(path) => ConfigLoader::new(Some(path), ENV_PREFIX).load(),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                ConfigLoader::new(Some(default_path), ENV_PREFIX).load()
            } else {
                tracing::debug!(
                    "no configuration file at '{}', using built-in defaults",
                    DEFAULT_CONFIG_PATH
                );
                ConfigLoader::new(None, ENV_PREFIX).load()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_strip_vowels() {
        let app_config = AppConfig::default();
        assert_eq!(app_config.strip, DEFAULT_STRIP);
        assert!(app_config.dictionary.is_none());
        assert!(app_config.validate().is_ok());
    }

    #[test]
    fn empty_strip_fails_validation() {
        let app_config = AppConfig {
            strip: String::new(),
            dictionary: None,
        };
        assert!(app_config.validate().is_err());
    }

    #[test]
    fn loads_values_from_a_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shrtnd.toml");
        fs::write(&path, "strip = \"xyz\"\ndictionary = \"words.txt\"\n").unwrap();

        let app_config = ConfigLoader::new(Some(path), "SHRTND_TEST").load().unwrap();
        assert_eq!(app_config.strip, "xyz");
        assert_eq!(app_config.dictionary, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let result = ConfigLoader::new(Some(path.clone()), "SHRTND_TEST").load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(p)) if p == path));
    }

    #[test]
    fn invalid_file_values_fail_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shrtnd.toml");
        fs::write(&path, "strip = \"\"\n").unwrap();

        let result = ConfigLoader::new(Some(path), "SHRTND_TEST").load();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
