//! Assertion generation.
//!
//! [`AssertionGenerator`] composes four collaborators, each responsible for
//! one part of the assertion:
//!
//! - [`IssuerGenerator`] - the `Issuer` element
//! - [`SubjectGenerator`] - the `Subject` with its bearer confirmation
//! - [`AuthnStatementGenerator`] - the `AuthnStatement`
//! - [`AttributeStatementGenerator`] - the `AttributeStatement`
//!
//! Identifiers and the current time come from the injected
//! [`IdService`](sidp_core::IdService) and [`TimeService`](sidp_core::TimeService).

mod assertion;
mod attribute_statement;
mod authn_statement;
mod issuer;
mod subject;

pub use assertion::AssertionGenerator;
pub use attribute_statement::AttributeStatementGenerator;
pub use authn_statement::AuthnStatementGenerator;
pub use issuer::IssuerGenerator;
pub use subject::{SubjectConfirmationParams, SubjectGenerator};

use sidp_core::{SamlConfig, ValidityAnchor};

use crate::error::{SamlError, SamlResult};
use crate::types::{AuthnContextClass, NameIdFormat};

/// Default name of the attribute carrying granted authorities.
pub const DEFAULT_AUTHORITIES_ATTRIBUTE: &str = "Authorities";

/// Tunables shared by the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Format of the subject's name ID.
    pub name_id_format: NameIdFormat,

    /// Authentication context class written on the authentication statement.
    pub authn_context_class: AuthnContextClass,

    /// Name of the attribute carrying granted authorities.
    pub authorities_attribute_name: String,

    /// Instant the subject confirmation lifetime is counted from.
    pub validity_anchor: ValidityAnchor,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            name_id_format: NameIdFormat::Unspecified,
            authn_context_class: AuthnContextClass::PasswordProtectedTransport,
            authorities_attribute_name: DEFAULT_AUTHORITIES_ATTRIBUTE.to_string(),
            validity_anchor: ValidityAnchor::IssueInstant,
        }
    }
}

impl GeneratorSettings {
    /// Builds settings from the SAML section of the configuration.
    pub fn from_config(config: &SamlConfig) -> SamlResult<Self> {
        let name_id_format = NameIdFormat::from_uri(&config.name_id_format)
            .ok_or_else(|| SamlError::UnsupportedNameIdFormat(config.name_id_format.clone()))?;

        let authn_context_class = AuthnContextClass::from_uri(&config.authn_context_class_ref)
            .ok_or_else(|| {
                SamlError::UnsupportedAuthnContext(config.authn_context_class_ref.clone())
            })?;

        if config.authorities_attribute_name.trim().is_empty() {
            return Err(SamlError::Config(
                "authorities attribute name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name_id_format,
            authn_context_class,
            authorities_attribute_name: config.authorities_attribute_name.clone(),
            validity_anchor: config.validity_anchor,
        })
    }
}
