//! Configuration error module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The configuration sources could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// The configuration holds an invalid value.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
