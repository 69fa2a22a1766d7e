//! SAML 2.0 assertion generation.
//!
//! Builds the `Assertion` an identity provider issues after a principal has
//! authenticated:
//!
//! - **Issuer** - the configured identity provider entity
//! - **Subject** - the principal's name ID plus a bearer subject confirmation
//!   bound to the recipient URL, a validity window, the request being
//!   answered and the originating address
//! - **AuthnStatement** - when (and how) the principal authenticated
//! - **AttributeStatement** - the principal's granted authorities
//!
//! # Architecture
//!
//! - [`types`] - Plain SAML data structures and constants
//! - [`generator`] - The assertion generator and its collaborators
//! - [`xml`] - Serialization of assertions to SAML 2.0 XML
//! - [`error`] - Error types for SAML operations
//!
//! Signing, bindings and metadata are handled elsewhere; the generated
//! assertion is handed to the caller as a value.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sidp_core::{RandomIdService, SystemTimeService};
//! use sidp_protocol_saml::AssertionGenerator;
//!
//! let generator = AssertionGenerator::new(
//!     "https://idp.example.com",
//!     Arc::new(SystemTimeService::new()),
//!     Arc::new(RandomIdService::new()),
//! );
//! let assertion = generator.generate_assertion(
//!     &token,
//!     "https://sp.example.com/acs",
//!     300,
//!     Some("_request-id"),
//!     authn_instant,
//! )?;
//! let xml = sidp_protocol_saml::xml::to_xml(&assertion)?;
//! ```
//!
//! # SAML Specifications
//!
//! - [SAML 2.0 Core](https://docs.oasis-open.org/security/saml/v2.0/saml-core-2.0-os.pdf)
//! - [SAML 2.0 Profiles](https://docs.oasis-open.org/security/saml/v2.0/saml-profiles-2.0-os.pdf)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod generator;
pub mod types;
pub mod xml;

pub use error::{SamlError, SamlResult};
pub use generator::{AssertionGenerator, GeneratorSettings};
pub use types::*;
