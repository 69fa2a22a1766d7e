//! SAML name identifier types.
//!
//! Name identifiers name the subject of an assertion and, in the `Issuer`
//! element, the identity provider that produced it.

use serde::{Deserialize, Serialize};

use super::NameIdFormat;

/// SAML Name ID.
///
/// Identifies the subject of an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameId {
    /// The identifier value.
    pub value: String,

    /// The format of the name identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl NameId {
    /// Creates a name ID with no format.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: None,
        }
    }

    /// Creates a name ID with the `unspecified` format.
    #[must_use]
    pub fn unspecified(value: impl Into<String>) -> Self {
        Self::new(value).with_format(NameIdFormat::Unspecified)
    }

    /// Sets the format for this name ID.
    #[must_use]
    pub fn with_format(mut self, format: NameIdFormat) -> Self {
        self.format = Some(format.uri().to_string());
        self
    }

    /// Returns the parsed name ID format.
    #[must_use]
    pub fn parsed_format(&self) -> NameIdFormat {
        self.format
            .as_deref()
            .and_then(NameIdFormat::from_uri)
            .unwrap_or_default()
    }
}

/// SAML Issuer.
///
/// The entity that produced an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    /// The issuing entity's name.
    pub value: String,

    /// The format of the issuer name. Absent means `entity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Issuer {
    /// Creates an issuer with the `entity` format.
    #[must_use]
    pub fn entity(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: Some(NameIdFormat::Entity.uri().to_string()),
        }
    }
}
