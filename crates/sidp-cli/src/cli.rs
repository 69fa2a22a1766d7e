//! CLI argument parsing.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// sidp - SAML identity provider assertion tool.
#[derive(Debug, Parser)]
#[command(name = "sidp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ~/.sidp/sidp.toml when present).
    #[arg(short, long, env = "SIDP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "xml")]
    pub output: OutputFormat,

    /// Enable verbose (debug) logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate an assertion for an authenticated principal.
    Generate(GenerateArgs),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for assertion generation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Username of the authenticated principal.
    #[arg(short, long)]
    pub username: String,

    /// Assertion consumer service URL of the service provider.
    #[arg(short, long)]
    pub recipient: String,

    /// Subject confirmation lifetime in seconds (overrides config).
    #[arg(long)]
    pub valid_for: Option<u32>,

    /// ID of the AuthnRequest being answered.
    #[arg(long)]
    pub in_response_to: Option<String>,

    /// Network address the principal authenticated from.
    #[arg(long, default_value = "127.0.0.1")]
    pub remote_address: String,

    /// HTTP session identifier, written as the session index.
    #[arg(long)]
    pub session_id: Option<String>,

    /// Granted authority (repeatable).
    #[arg(short, long = "authority")]
    pub authorities: Vec<String>,

    /// Authentication instant, RFC 3339 (defaults to now).
    #[arg(long)]
    pub authn_instant: Option<DateTime<Utc>>,

    /// Pin the current time, RFC 3339, for reproducible output.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Issuing entity name (overrides config).
    #[arg(long)]
    pub issuer: Option<String>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,

    /// Show the default configuration file path.
    Path,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact XML.
    #[default]
    Xml,
    /// Indented XML document.
    Pretty,
    /// JSON.
    Json,
}
