//! Issuer generation.

use crate::types::Issuer;

/// Produces the `Issuer` element naming this identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerGenerator {
    issuing_entity_name: String,
}

impl IssuerGenerator {
    /// Creates a generator for the given issuing entity name.
    #[must_use]
    pub fn new(issuing_entity_name: impl Into<String>) -> Self {
        Self {
            issuing_entity_name: issuing_entity_name.into(),
        }
    }

    /// Returns the configured issuing entity name.
    #[must_use]
    pub fn issuing_entity_name(&self) -> &str {
        &self.issuing_entity_name
    }

    /// Generates the issuer.
    #[must_use]
    pub fn generate_issuer(&self) -> Issuer {
        Issuer::entity(&self.issuing_entity_name)
    }
}
