//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Core error.
    #[error(transparent)]
    Core(#[from] sidp_core::Error),

    /// SAML error.
    #[error("SAML error: {0}")]
    Saml(#[from] sidp_protocol_saml::SamlError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// Configuration and usage errors exit with 2, everything else with 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArgument(_) => 2,
            Self::Core(err) if err.is_config_error() => 2,
            Self::Saml(sidp_protocol_saml::SamlError::Config(_)) => 2,
            _ => 1,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
