//! # sidp-cli
//!
//! Command-line tool for the SAML identity provider.
//!
//! This crate provides:
//! - Assertion generation from command-line arguments
//! - Configuration inspection

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, CliResult};
