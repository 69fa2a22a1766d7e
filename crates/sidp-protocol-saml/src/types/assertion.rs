//! SAML Assertion types.
//!
//! Assertions contain statements about a subject made by an issuer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    attribute_name_formats, confirmation_methods, AuthnContextClass, Issuer, NameId,
    SAML_VERSION,
};

/// SAML Assertion.
///
/// A package of statements made by the identity provider about an
/// authenticated subject. An assertion built here always carries exactly one
/// issuer, subject, authentication statement and attribute statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Unique identifier for this assertion.
    pub id: String,

    /// Version of the SAML protocol (always "2.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Timestamp when this assertion was issued.
    pub issue_instant: DateTime<Utc>,

    /// The identity provider that issued this assertion.
    pub issuer: Issuer,

    /// The subject of this assertion.
    pub subject: Subject,

    /// Authentication statement describing how the subject authenticated.
    pub authn_statement: AuthnStatement,

    /// Attribute statement containing attributes about the subject.
    pub attribute_statement: AttributeStatement,
}

fn default_version() -> String {
    SAML_VERSION.to_string()
}

impl Assertion {
    /// Assembles an assertion from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        issue_instant: DateTime<Utc>,
        issuer: Issuer,
        subject: Subject,
        authn_statement: AuthnStatement,
        attribute_statement: AttributeStatement,
    ) -> Self {
        Self {
            id: id.into(),
            version: default_version(),
            issue_instant,
            issuer,
            subject,
            authn_statement,
            attribute_statement,
        }
    }

    /// Returns the first bearer confirmation data of the subject, if any.
    #[must_use]
    pub fn bearer_confirmation_data(&self) -> Option<&SubjectConfirmationData> {
        self.subject
            .subject_confirmations
            .iter()
            .find(|c| c.method == confirmation_methods::BEARER)
            .and_then(|c| c.subject_confirmation_data.as_ref())
    }
}

/// Subject of an assertion.
///
/// Identifies the principal that is the subject of all statements in the assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// The name identifier for the subject.
    pub name_id: NameId,

    /// Subject confirmations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_confirmations: Vec<SubjectConfirmation>,
}

impl Subject {
    /// Creates a subject with a name ID and no confirmations.
    #[must_use]
    pub fn new(name_id: NameId) -> Self {
        Self {
            name_id,
            subject_confirmations: Vec::new(),
        }
    }

    /// Adds a subject confirmation.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: SubjectConfirmation) -> Self {
        self.subject_confirmations.push(confirmation);
        self
    }
}

/// Subject confirmation.
///
/// Information that allows the assertion consumer to confirm the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectConfirmation {
    /// The confirmation method.
    pub method: String,

    /// Additional confirmation data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_confirmation_data: Option<SubjectConfirmationData>,
}

impl SubjectConfirmation {
    /// Creates a bearer confirmation.
    #[must_use]
    pub fn bearer() -> Self {
        Self {
            method: confirmation_methods::BEARER.to_string(),
            subject_confirmation_data: None,
        }
    }

    /// Sets the confirmation data.
    #[must_use]
    pub fn with_data(mut self, data: SubjectConfirmationData) -> Self {
        self.subject_confirmation_data = Some(data);
        self
    }
}

/// Subject confirmation data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectConfirmationData {
    /// The request ID that this assertion responds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_response_to: Option<String>,

    /// Time at or after which the subject can no longer be confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// Time before which the subject cannot be confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<DateTime<Utc>>,

    /// The location to which the assertion can be presented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Network address of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Authentication statement.
///
/// Describes the act of authentication performed by the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthnStatement {
    /// The time of authentication.
    pub authn_instant: DateTime<Utc>,

    /// The session index, when the authentication established a session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_index: Option<String>,

    /// The authentication context.
    pub authn_context: AuthnContext,
}

impl AuthnStatement {
    /// Creates an authentication statement for the given instant.
    #[must_use]
    pub fn new(authn_instant: DateTime<Utc>, context_class: AuthnContextClass) -> Self {
        Self {
            authn_instant,
            session_index: None,
            authn_context: AuthnContext::class_ref(context_class),
        }
    }

    /// Sets the session index.
    #[must_use]
    pub fn with_session_index(mut self, session_index: impl Into<String>) -> Self {
        self.session_index = Some(session_index.into());
        self
    }
}

/// Authentication context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthnContext {
    /// Authentication context class reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authn_context_class_ref: Option<String>,
}

impl AuthnContext {
    /// Creates an authentication context with a class reference.
    #[must_use]
    pub fn class_ref(class: AuthnContextClass) -> Self {
        Self {
            authn_context_class_ref: Some(class.uri().to_string()),
        }
    }
}

/// Attribute statement.
///
/// Contains attributes about the subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStatement {
    /// List of attributes.
    pub attributes: Vec<Attribute>,
}

impl AttributeStatement {
    /// Creates a new empty attribute statement.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Finds an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// SAML Attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute name.
    pub name: String,

    /// The format of the attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_format: Option<String>,

    /// The attribute values.
    #[serde(default)]
    pub values: Vec<String>,
}

impl Attribute {
    /// Creates an attribute with the basic name format and the given values.
    #[must_use]
    pub fn basic(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            name_format: Some(attribute_name_formats::BASIC.to_string()),
            values,
        }
    }
}
