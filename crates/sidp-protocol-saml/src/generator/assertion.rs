//! Assertion generation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sidp_core::{IdService, SamlConfig, TimeService, ValidityAnchor};

use crate::error::{SamlError, SamlResult};
use crate::types::{Assertion, AuthenticationToken};

use super::{
    AttributeStatementGenerator, AuthnStatementGenerator, GeneratorSettings, IssuerGenerator,
    SubjectConfirmationParams, SubjectGenerator,
};

/// Builds the assertion issued for an authenticated principal.
///
/// Holds only immutable settings and shared services, so one generator can
/// serve concurrent requests.
pub struct AssertionGenerator<C, I> {
    issuer_generator: IssuerGenerator,
    subject_generator: SubjectGenerator<C>,
    authn_statement_generator: AuthnStatementGenerator,
    attribute_statement_generator: AttributeStatementGenerator,
    validity_anchor: ValidityAnchor,
    time_service: Arc<C>,
    id_service: Arc<I>,
}

impl<C: TimeService, I: IdService> AssertionGenerator<C, I> {
    /// Creates a generator with default settings.
    pub fn new(issuing_entity_name: impl Into<String>, time_service: Arc<C>, id_service: Arc<I>) -> Self {
        Self::with_settings(
            issuing_entity_name,
            &GeneratorSettings::default(),
            time_service,
            id_service,
        )
    }

    /// Creates a generator with explicit settings.
    pub fn with_settings(
        issuing_entity_name: impl Into<String>,
        settings: &GeneratorSettings,
        time_service: Arc<C>,
        id_service: Arc<I>,
    ) -> Self {
        Self {
            issuer_generator: IssuerGenerator::new(issuing_entity_name),
            subject_generator: SubjectGenerator::new(Arc::clone(&time_service))
                .with_name_id_format(settings.name_id_format),
            authn_statement_generator: AuthnStatementGenerator::new(settings.authn_context_class),
            attribute_statement_generator: AttributeStatementGenerator::new(
                &settings.authorities_attribute_name,
            ),
            validity_anchor: settings.validity_anchor,
            time_service,
            id_service,
        }
    }

    /// Creates a generator from the SAML section of the configuration.
    pub fn from_config(config: &SamlConfig, time_service: Arc<C>, id_service: Arc<I>) -> SamlResult<Self> {
        if config.issuer.trim().is_empty() {
            return Err(SamlError::Config("issuer must not be empty".to_string()));
        }
        let settings = GeneratorSettings::from_config(config)?;
        Ok(Self::with_settings(&config.issuer, &settings, time_service, id_service))
    }

    /// Returns the issuing entity name.
    #[must_use]
    pub fn issuing_entity_name(&self) -> &str {
        self.issuer_generator.issuing_entity_name()
    }

    /// Generates an assertion for an authenticated principal.
    ///
    /// # Arguments
    ///
    /// * `auth_token` - The successful authentication
    /// * `recipient_url` - Assertion consumer service URL of the service provider
    /// * `valid_for_seconds` - Lifetime of the subject confirmation
    /// * `in_response_to` - ID of the `AuthnRequest` being answered, if any
    /// * `authn_instant` - When the principal authenticated
    ///
    /// The issue instant is read once from the time service; the identifier
    /// comes from the identifier service.
    pub fn generate_assertion(
        &self,
        auth_token: &AuthenticationToken,
        recipient_url: &str,
        valid_for_seconds: u32,
        in_response_to: Option<&str>,
        authn_instant: DateTime<Utc>,
    ) -> SamlResult<Assertion> {
        let username = auth_token.username();
        if username.trim().is_empty() {
            tracing::warn!("refusing to generate assertion for principal without username");
            return Err(SamlError::MissingElement("principal username".to_string()));
        }
        if recipient_url.trim().is_empty() {
            tracing::warn!("refusing to generate assertion without recipient URL");
            return Err(SamlError::InvalidRequest(
                "recipient assertion consumer URL is required".to_string(),
            ));
        }

        let now = self.time_service.current_date_time();
        let anchor = match self.validity_anchor {
            ValidityAnchor::IssueInstant => now,
            ValidityAnchor::AuthnInstant => authn_instant,
        };

        let params = SubjectConfirmationParams {
            recipient: recipient_url,
            valid_for_seconds,
            in_response_to,
            address: auth_token.remote_address(),
        };
        let subject = self.subject_generator.generate_subject_at(username, &params, anchor)?;

        let issuer = self.issuer_generator.generate_issuer();

        let authn_statement = self
            .authn_statement_generator
            .generate_authn_statement(authn_instant, auth_token.details.session_id.as_deref());

        let attribute_statement = self
            .attribute_statement_generator
            .generate_attribute_statement(&auth_token.authorities);

        let assertion = Assertion::new(
            self.id_service.generate_id(),
            now,
            issuer,
            subject,
            authn_statement,
            attribute_statement,
        );

        tracing::debug!(
            assertion_id = %assertion.id,
            recipient = recipient_url,
            in_response_to = in_response_to.unwrap_or(""),
            valid_for_seconds,
            authorities = auth_token.authorities.len(),
            "generated SAML assertion"
        );

        Ok(assertion)
    }
}
