//! SAML error types.
//!
//! Provides error types for assertion generation and serialization.

use thiserror::Error;

use crate::types::{status_codes, sub_status_codes};

/// Result type for SAML operations.
pub type SamlResult<T> = Result<T, SamlError>;

/// SAML protocol errors.
#[derive(Debug, Error)]
pub enum SamlError {
    /// Invalid input supplied for the assertion.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Missing required element or value.
    #[error("missing required element: {0}")]
    MissingElement(String),

    /// The assertion could not be built as requested.
    #[error("invalid assertion: {0}")]
    InvalidAssertion(String),

    /// Unknown or unsupported name ID format.
    #[error("unsupported name ID format: {0}")]
    UnsupportedNameIdFormat(String),

    /// Unknown or unsupported authentication context class.
    #[error("unsupported authentication context class: {0}")]
    UnsupportedAuthnContext(String),

    /// XML writing error.
    #[error("XML write error: {0}")]
    XmlWrite(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SamlError {
    /// Returns the SAML status code for this error.
    ///
    /// Lets a response builder report the failure with the top-level status
    /// codes defined in SAML 2.0 Core, section 3.2.2.2.
    #[must_use]
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_)
            | Self::MissingElement(_)
            | Self::UnsupportedNameIdFormat(_)
            | Self::UnsupportedAuthnContext(_) => status_codes::REQUESTER,
            _ => status_codes::RESPONDER,
        }
    }

    /// Returns a sub-status code if applicable.
    #[must_use]
    pub fn sub_status_code(&self) -> Option<&'static str> {
        match self {
            Self::MissingElement(_) => Some(sub_status_codes::UNKNOWN_PRINCIPAL),
            Self::UnsupportedNameIdFormat(_) => Some(sub_status_codes::INVALID_NAMEID_POLICY),
            Self::UnsupportedAuthnContext(_) => Some(sub_status_codes::NO_AUTHN_CONTEXT),
            _ => None,
        }
    }
}

impl From<sidp_core::Error> for SamlError {
    fn from(err: sidp_core::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<quick_xml::Error> for SamlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlWrite(err.to_string())
    }
}

impl From<std::io::Error> for SamlError {
    fn from(err: std::io::Error) -> Self {
        Self::XmlWrite(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SamlError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::XmlWrite(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        let err = SamlError::InvalidRequest("test".to_string());
        assert_eq!(err.status_code(), "urn:oasis:names:tc:SAML:2.0:status:Requester");
        assert_eq!(err.sub_status_code(), None);

        let err = SamlError::MissingElement("username".to_string());
        assert_eq!(err.status_code(), "urn:oasis:names:tc:SAML:2.0:status:Requester");
        assert_eq!(
            err.sub_status_code(),
            Some("urn:oasis:names:tc:SAML:2.0:status:UnknownPrincipal")
        );

        let err = SamlError::XmlWrite("test".to_string());
        assert_eq!(err.status_code(), "urn:oasis:names:tc:SAML:2.0:status:Responder");
    }

    #[test]
    fn core_errors_become_config_errors() {
        let err = SamlError::from(sidp_core::Error::Validation("issuer".to_string()));
        assert!(matches!(err, SamlError::Config(_)));
        assert_eq!(err.to_string(), "configuration error: validation error: issuer");
    }
}
