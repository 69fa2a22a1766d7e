//! SAML 2.0 types and data structures.
//!
//! Plain data structures for assertions and the authenticated principal
//! they are generated from.

mod assertion;
mod constants;
mod name_id;
mod principal;

pub use assertion::*;
pub use constants::*;
pub use name_id::*;
pub use principal::*;
