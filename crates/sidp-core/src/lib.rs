//! # sidp-core
//!
//! Core configuration, error handling and injectable services for the
//! SAML identity provider.
//!
//! This crate provides the foundational pieces shared by the protocol and
//! CLI crates:
//!
//! - [`config`] - Identity provider configuration (TOML file, environment)
//! - [`error`] - Core error type
//! - [`service`] - Identifier generation and current-time services

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod service;

pub use config::{load_dotenv, Config, LoggingConfig, SamlConfig, ValidityAnchor};
pub use error::{Error, Result};
pub use service::{FixedTimeService, IdService, RandomIdService, SystemTimeService, TimeService};
