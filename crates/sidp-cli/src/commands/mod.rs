//! Command implementations.

pub mod config;
pub mod generate;

pub use config::run_config;
pub use generate::run_generate;
