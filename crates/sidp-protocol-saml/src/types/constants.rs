//! SAML 2.0 constants and URIs.
//!
//! Contains namespace URIs, name ID formats, authentication context classes
//! and other constants defined in the SAML 2.0 specification.

/// SAML protocol version written on every assertion.
pub const SAML_VERSION: &str = "2.0";

/// SAML 2.0 assertion namespace URI.
pub const SAML_NS: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

/// XSI namespace URI.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XS namespace URI.
pub const XS_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Subject confirmation methods.
pub mod confirmation_methods {
    /// Bearer confirmation method.
    pub const BEARER: &str = "urn:oasis:names:tc:SAML:2.0:cm:bearer";
}

/// Attribute name formats.
pub mod attribute_name_formats {
    /// Basic name format.
    pub const BASIC: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:basic";
}

// ============================================================================
// Name ID Formats
// ============================================================================

/// SAML Name ID formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameIdFormat {
    /// Unspecified name ID format.
    #[default]
    Unspecified,
    /// Email address format.
    Email,
    /// X.509 subject name format.
    X509SubjectName,
    /// Windows domain qualified name format.
    WindowsDomainQualifiedName,
    /// Kerberos principal name format.
    Kerberos,
    /// Entity identifier format.
    Entity,
    /// Persistent identifier format.
    Persistent,
    /// Transient identifier format.
    Transient,
}

impl NameIdFormat {
    /// Returns the URI for this name ID format.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Unspecified => "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified",
            Self::Email => "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress",
            Self::X509SubjectName => "urn:oasis:names:tc:SAML:1.1:nameid-format:X509SubjectName",
            Self::WindowsDomainQualifiedName => {
                "urn:oasis:names:tc:SAML:1.1:nameid-format:WindowsDomainQualifiedName"
            }
            Self::Kerberos => "urn:oasis:names:tc:SAML:2.0:nameid-format:kerberos",
            Self::Entity => "urn:oasis:names:tc:SAML:2.0:nameid-format:entity",
            Self::Persistent => "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent",
            Self::Transient => "urn:oasis:names:tc:SAML:2.0:nameid-format:transient",
        }
    }

    /// Parses a name ID format from its URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified" => Some(Self::Unspecified),
            "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress" => Some(Self::Email),
            "urn:oasis:names:tc:SAML:1.1:nameid-format:X509SubjectName" => {
                Some(Self::X509SubjectName)
            }
            "urn:oasis:names:tc:SAML:1.1:nameid-format:WindowsDomainQualifiedName" => {
                Some(Self::WindowsDomainQualifiedName)
            }
            "urn:oasis:names:tc:SAML:2.0:nameid-format:kerberos" => Some(Self::Kerberos),
            "urn:oasis:names:tc:SAML:2.0:nameid-format:entity" => Some(Self::Entity),
            "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent" => Some(Self::Persistent),
            "urn:oasis:names:tc:SAML:2.0:nameid-format:transient" => Some(Self::Transient),
            _ => None,
        }
    }
}

// ============================================================================
// Authentication Context Classes
// ============================================================================

/// SAML authentication context class references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthnContextClass {
    /// Unspecified authentication context.
    #[default]
    Unspecified,
    /// Password-based authentication.
    Password,
    /// Password protected transport (TLS + password).
    PasswordProtectedTransport,
    /// X.509 certificate authentication.
    X509,
    /// TLS client authentication.
    TlsClient,
    /// Kerberos authentication.
    Kerberos,
    /// Previous session (SSO).
    PreviousSession,
}

impl AuthnContextClass {
    /// Returns the URI for this authentication context class.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Unspecified => "urn:oasis:names:tc:SAML:2.0:ac:classes:unspecified",
            Self::Password => "urn:oasis:names:tc:SAML:2.0:ac:classes:Password",
            Self::PasswordProtectedTransport => {
                "urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport"
            }
            Self::X509 => "urn:oasis:names:tc:SAML:2.0:ac:classes:X509",
            Self::TlsClient => "urn:oasis:names:tc:SAML:2.0:ac:classes:TLSClient",
            Self::Kerberos => "urn:oasis:names:tc:SAML:2.0:ac:classes:Kerberos",
            Self::PreviousSession => "urn:oasis:names:tc:SAML:2.0:ac:classes:PreviousSession",
        }
    }

    /// Parses an authentication context class from its URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "urn:oasis:names:tc:SAML:2.0:ac:classes:unspecified" => Some(Self::Unspecified),
            "urn:oasis:names:tc:SAML:2.0:ac:classes:Password" => Some(Self::Password),
            "urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport" => {
                Some(Self::PasswordProtectedTransport)
            }
            "urn:oasis:names:tc:SAML:2.0:ac:classes:X509" => Some(Self::X509),
            "urn:oasis:names:tc:SAML:2.0:ac:classes:TLSClient" => Some(Self::TlsClient),
            "urn:oasis:names:tc:SAML:2.0:ac:classes:Kerberos" => Some(Self::Kerberos),
            "urn:oasis:names:tc:SAML:2.0:ac:classes:PreviousSession" => Some(Self::PreviousSession),
            _ => None,
        }
    }
}

// ============================================================================
// Status Codes
// ============================================================================

/// Top-level SAML status codes reported for generation failures.
pub mod status_codes {
    /// Requester error status code.
    pub const REQUESTER: &str = "urn:oasis:names:tc:SAML:2.0:status:Requester";

    /// Responder error status code.
    pub const RESPONDER: &str = "urn:oasis:names:tc:SAML:2.0:status:Responder";
}

/// Second-level SAML status codes.
pub mod sub_status_codes {
    /// Invalid name ID policy.
    pub const INVALID_NAMEID_POLICY: &str = "urn:oasis:names:tc:SAML:2.0:status:InvalidNameIDPolicy";

    /// No authn context.
    pub const NO_AUTHN_CONTEXT: &str = "urn:oasis:names:tc:SAML:2.0:status:NoAuthnContext";

    /// Unknown principal.
    pub const UNKNOWN_PRINCIPAL: &str = "urn:oasis:names:tc:SAML:2.0:status:UnknownPrincipal";
}
