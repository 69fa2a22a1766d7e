//! Authenticated principal types.
//!
//! The result of a successful login as handed over by the authentication
//! layer: who the principal is, where the request came from, and what the
//! principal is allowed to do.

use serde::{Deserialize, Serialize};

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The principal's username.
    pub username: String,
}

impl Principal {
    /// Creates a principal.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Details of the web request the principal authenticated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAuthenticationDetails {
    /// Network address the request originated from.
    pub remote_address: String,

    /// HTTP session identifier, if a session was established.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl WebAuthenticationDetails {
    /// Creates request details for a remote address.
    #[must_use]
    pub fn new(remote_address: impl Into<String>) -> Self {
        Self {
            remote_address: remote_address.into(),
            session_id: None,
        }
    }

    /// Sets the session identifier.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// An authority (role or permission) granted to a principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantedAuthority(String);

impl GrantedAuthority {
    /// Creates a granted authority.
    #[must_use]
    pub fn new(authority: impl Into<String>) -> Self {
        Self(authority.into())
    }

    /// Returns the authority string.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GrantedAuthority {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GrantedAuthority {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A successful username/password authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationToken {
    /// The authenticated principal.
    pub principal: Principal,

    /// Request details.
    pub details: WebAuthenticationDetails,

    /// Authorities granted to the principal.
    #[serde(default)]
    pub authorities: Vec<GrantedAuthority>,
}

impl AuthenticationToken {
    /// Creates an authentication token with no authorities.
    #[must_use]
    pub fn new(principal: Principal, details: WebAuthenticationDetails) -> Self {
        Self {
            principal,
            details,
            authorities: Vec::new(),
        }
    }

    /// Adds a granted authority.
    #[must_use]
    pub fn with_authority(mut self, authority: impl Into<GrantedAuthority>) -> Self {
        self.authorities.push(authority.into());
        self
    }

    /// Returns the principal's username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.principal.username
    }

    /// Returns the originating network address.
    #[must_use]
    pub fn remote_address(&self) -> &str {
        &self.details.remote_address
    }
}
