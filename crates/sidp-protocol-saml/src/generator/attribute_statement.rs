//! Attribute statement generation.

use crate::types::{Attribute, AttributeStatement, GrantedAuthority};

use super::DEFAULT_AUTHORITIES_ATTRIBUTE;

/// Produces the `AttributeStatement` listing the principal's authorities.
///
/// The statement holds a single attribute with one value per granted
/// authority, in the order the authorities were granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeStatementGenerator {
    attribute_name: String,
}

impl Default for AttributeStatementGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHORITIES_ATTRIBUTE)
    }
}

impl AttributeStatementGenerator {
    /// Creates a generator writing authorities under `attribute_name`.
    #[must_use]
    pub fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
        }
    }

    /// Generates the attribute statement for the given authorities.
    #[must_use]
    pub fn generate_attribute_statement(&self, authorities: &[GrantedAuthority]) -> AttributeStatement {
        let values = authorities
            .iter()
            .map(|a| a.authority().to_string())
            .collect();

        AttributeStatement::new().with_attribute(Attribute::basic(&self.attribute_name, values))
    }
}
