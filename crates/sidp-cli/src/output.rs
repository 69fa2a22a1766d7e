//! Output formatting utilities.

use colored::Colorize;
use sidp_protocol_saml::{xml, Assertion};

use crate::cli::OutputFormat;
use crate::CliResult;

/// Prints a success message.
pub fn success(message: &str) {
    eprintln!("{} {message}", "✓".green().bold());
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {message}", "✗".red().bold());
}

/// Prints an info message.
pub fn info(message: &str) {
    eprintln!("{} {message}", "ℹ".blue().bold());
}

/// Renders an assertion in the requested format.
pub fn render_assertion(assertion: &Assertion, format: OutputFormat) -> CliResult<String> {
    let rendered = match format {
        OutputFormat::Xml => xml::to_xml(assertion)?,
        OutputFormat::Pretty => xml::to_pretty_xml(assertion)?,
        OutputFormat::Json => serde_json::to_string_pretty(assertion)?,
    };
    Ok(rendered)
}
