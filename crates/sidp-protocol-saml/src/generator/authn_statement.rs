//! Authentication statement generation.

use chrono::{DateTime, Utc};

use crate::types::{AuthnContextClass, AuthnStatement};

/// Produces the `AuthnStatement` recording when the principal authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthnStatementGenerator {
    context_class: AuthnContextClass,
}

impl Default for AuthnStatementGenerator {
    fn default() -> Self {
        Self::new(AuthnContextClass::PasswordProtectedTransport)
    }
}

impl AuthnStatementGenerator {
    /// Creates a generator writing the given authentication context class.
    #[must_use]
    pub const fn new(context_class: AuthnContextClass) -> Self {
        Self { context_class }
    }

    /// Generates an authentication statement for `authn_instant`.
    ///
    /// The session index is set when the principal's request established a
    /// session.
    #[must_use]
    pub fn generate_authn_statement(
        &self,
        authn_instant: DateTime<Utc>,
        session_index: Option<&str>,
    ) -> AuthnStatement {
        let statement = AuthnStatement::new(authn_instant, self.context_class);
        match session_index {
            Some(index) => statement.with_session_index(index),
            None => statement,
        }
    }
}
