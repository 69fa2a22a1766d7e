//! Configuration management for the identity provider.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variable overrides.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding [`SamlConfig::issuer`].
pub const ENV_ISSUER: &str = "SIDP_ISSUER";

/// Environment variable overriding [`SamlConfig::valid_for_seconds`].
pub const ENV_VALID_FOR_SECONDS: &str = "SIDP_VALID_FOR_SECONDS";

/// Environment variable overriding [`SamlConfig::validity_anchor`].
pub const ENV_VALIDITY_ANCHOR: &str = "SIDP_VALIDITY_ANCHOR";

/// Environment variable overriding [`LoggingConfig::level`].
pub const ENV_LOG_LEVEL: &str = "SIDP_LOG_LEVEL";

/// Loads a `.env` file from the working directory or its parents into the
/// process environment, if one exists.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SAML assertion settings.
    pub saml: SamlConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// SAML assertion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamlConfig {
    /// Entity name of the issuing identity provider.
    pub issuer: String,

    /// Default lifetime of the subject confirmation, in seconds.
    pub valid_for_seconds: u32,

    /// Instant from which the subject confirmation lifetime is counted.
    pub validity_anchor: ValidityAnchor,

    /// Name ID format URI used for the subject.
    pub name_id_format: String,

    /// Authentication context class reference URI.
    pub authn_context_class_ref: String,

    /// Name of the attribute carrying granted authorities.
    pub authorities_attribute_name: String,
}

impl Default for SamlConfig {
    fn default() -> Self {
        Self {
            issuer: "http://localhost:8080/idp".to_string(),
            valid_for_seconds: 300,
            validity_anchor: ValidityAnchor::default(),
            name_id_format: "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified".to_string(),
            authn_context_class_ref:
                "urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport".to_string(),
            authorities_attribute_name: "Authorities".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Anchor instant for the subject confirmation validity window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityAnchor {
    /// Count from the assertion's issue instant (the time service's "now").
    #[default]
    IssueInstant,
    /// Count from the instant the principal authenticated.
    AuthnInstant,
}

impl ValidityAnchor {
    /// Returns the configuration name of this anchor.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IssueInstant => "issue_instant",
            Self::AuthnInstant => "authn_instant",
        }
    }
}

impl FromStr for ValidityAnchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "issue_instant" | "now" => Ok(Self::IssueInstant),
            "authn_instant" => Ok(Self::AuthnInstant),
            other => Err(Error::Config(format!("unknown validity anchor: {other}"))),
        }
    }
}

impl Config {
    /// Parses configuration from a TOML document. Missing keys take their
    /// default values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {e}")))
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))
    }

    /// Applies overrides from a key lookup, typically the process
    /// environment (`|key| std::env::var(key).ok()`).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(issuer) = lookup(ENV_ISSUER) {
            self.saml.issuer = issuer;
        }

        if let Some(value) = lookup(ENV_VALID_FOR_SECONDS) {
            self.saml.valid_for_seconds = value.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_VALID_FOR_SECONDS} must be a non-negative integer"))
            })?;
        }

        if let Some(value) = lookup(ENV_VALIDITY_ANCHOR) {
            self.saml.validity_anchor = value.parse()?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.saml.issuer.trim().is_empty() {
            return Err(Error::Validation("saml.issuer must not be empty".to_string()));
        }
        if self.saml.name_id_format.trim().is_empty() {
            return Err(Error::Validation(
                "saml.name_id_format must not be empty".to_string(),
            ));
        }
        if self.saml.authorities_attribute_name.trim().is_empty() {
            return Err(Error::Validation(
                "saml.authorities_attribute_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
