//! Error handling for the identity provider core.
//!
//! Error messages describe what was rejected without echoing secrets.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be parsed or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// A value failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns whether this error was caused by the operator's input rather
    /// than the environment.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Validation(_))
    }
}
