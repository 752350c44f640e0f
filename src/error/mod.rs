//! Error module for shrtnd.
//!
//! Each component defines its own error enum; this module wraps them in a
//! single crate-level error with `From` conversions so the binary can bubble
//! everything up through one result type.

use thiserror::Error;

pub mod config;

pub use config::ConfigError;

use crate::codec::CodecError;
use crate::lookup::LookupError;

/// Result type alias used throughout shrtnd.
pub type ShrtndResult<T> = Result<T, ShrtndError>;

/// Core error enum for shrtnd.
#[derive(Error, Debug)]
pub enum ShrtndError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors from the lookup tree.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Errors from the transcoder.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// IO errors from dictionary file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
