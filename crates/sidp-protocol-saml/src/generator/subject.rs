//! Subject generation.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sidp_core::TimeService;

use crate::error::{SamlError, SamlResult};
use crate::types::{NameId, NameIdFormat, Subject, SubjectConfirmation, SubjectConfirmationData};

/// Inputs binding a subject confirmation to one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectConfirmationParams<'a> {
    /// Assertion consumer service URL the assertion may be presented to.
    pub recipient: &'a str,

    /// Lifetime of the confirmation, in seconds.
    pub valid_for_seconds: u32,

    /// ID of the request being answered, if any.
    pub in_response_to: Option<&'a str>,

    /// Network address the principal authenticated from.
    pub address: &'a str,
}

/// Produces the `Subject` naming the principal, with a single bearer
/// confirmation.
pub struct SubjectGenerator<C> {
    time_service: Arc<C>,
    name_id_format: NameIdFormat,
}

impl<C: TimeService> SubjectGenerator<C> {
    /// Creates a generator using the `unspecified` name ID format.
    pub fn new(time_service: Arc<C>) -> Self {
        Self {
            time_service,
            name_id_format: NameIdFormat::Unspecified,
        }
    }

    /// Sets the name ID format.
    #[must_use]
    pub fn with_name_id_format(mut self, format: NameIdFormat) -> Self {
        self.name_id_format = format;
        self
    }

    /// Generates a subject whose confirmation expires `valid_for_seconds`
    /// after the time service's current instant.
    pub fn generate_subject(
        &self,
        username: &str,
        params: &SubjectConfirmationParams<'_>,
    ) -> SamlResult<Subject> {
        self.generate_subject_at(username, params, self.time_service.current_date_time())
    }

    /// Generates a subject whose confirmation expires `valid_for_seconds`
    /// after `anchor`. A zero lifetime expires at `anchor` itself.
    pub fn generate_subject_at(
        &self,
        username: &str,
        params: &SubjectConfirmationParams<'_>,
        anchor: DateTime<Utc>,
    ) -> SamlResult<Subject> {
        let not_on_or_after = anchor
            .checked_add_signed(Duration::seconds(i64::from(params.valid_for_seconds)))
            .ok_or_else(|| {
                SamlError::InvalidAssertion(format!(
                    "validity of {}s from {anchor} is out of range",
                    params.valid_for_seconds
                ))
            })?;

        let data = SubjectConfirmationData {
            in_response_to: params.in_response_to.map(str::to_string),
            not_on_or_after: Some(not_on_or_after),
            not_before: None,
            recipient: Some(params.recipient.to_string()),
            address: Some(params.address.to_string()),
        };

        let name_id = NameId::new(username).with_format(self.name_id_format);

        Ok(Subject::new(name_id).with_confirmation(SubjectConfirmation::bearer().with_data(data)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sidp_core::FixedTimeService;

    use super::*;
    use crate::types::confirmation_methods;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    fn generator() -> SubjectGenerator<FixedTimeService> {
        SubjectGenerator::new(Arc::new(FixedTimeService::new(now())))
    }

    fn params(valid_for_seconds: u32) -> SubjectConfirmationParams<'static> {
        SubjectConfirmationParams {
            recipient: "https://sp.example.com/acs",
            valid_for_seconds,
            in_response_to: Some("req-123"),
            address: "192.0.2.10",
        }
    }

    #[test]
    fn subject_has_one_bearer_confirmation() {
        let subject = generator().generate_subject("alice", &params(300)).unwrap();

        assert_eq!(subject.name_id.value, "alice");
        assert_eq!(subject.name_id.parsed_format(), NameIdFormat::Unspecified);
        assert_eq!(subject.subject_confirmations.len(), 1);

        let confirmation = &subject.subject_confirmations[0];
        assert_eq!(confirmation.method, confirmation_methods::BEARER);

        let data = confirmation.subject_confirmation_data.as_ref().unwrap();
        assert_eq!(data.recipient.as_deref(), Some("https://sp.example.com/acs"));
        assert_eq!(data.in_response_to.as_deref(), Some("req-123"));
        assert_eq!(data.address.as_deref(), Some("192.0.2.10"));
        assert_eq!(data.not_on_or_after, Some(now() + Duration::seconds(300)));
        assert!(data.not_before.is_none());
    }

    #[test]
    fn zero_lifetime_expires_immediately() {
        let subject = generator().generate_subject("alice", &params(0)).unwrap();
        let data = subject.subject_confirmations[0]
            .subject_confirmation_data
            .as_ref()
            .unwrap();
        assert_eq!(data.not_on_or_after, Some(now()));
    }

    #[test]
    fn explicit_anchor_is_used() {
        let anchor = now() - Duration::hours(2);
        let subject = generator()
            .generate_subject_at("alice", &params(60), anchor)
            .unwrap();
        let data = subject.subject_confirmations[0]
            .subject_confirmation_data
            .as_ref()
            .unwrap();
        assert_eq!(data.not_on_or_after, Some(anchor + Duration::seconds(60)));
    }

    #[test]
    fn missing_correlation_is_omitted() {
        let params = SubjectConfirmationParams {
            in_response_to: None,
            ..params(30)
        };
        let subject = generator().generate_subject("alice", &params).unwrap();
        let data = subject.subject_confirmations[0]
            .subject_confirmation_data
            .as_ref()
            .unwrap();
        assert!(data.in_response_to.is_none());
    }

    #[test]
    fn configured_name_id_format() {
        let subject = generator()
            .with_name_id_format(NameIdFormat::Email)
            .generate_subject("alice@example.com", &params(30))
            .unwrap();
        assert_eq!(subject.name_id.parsed_format(), NameIdFormat::Email);
    }

    #[test]
    fn out_of_range_window_is_an_error() {
        let result = generator().generate_subject_at("alice", &params(1), DateTime::<Utc>::MAX_UTC);
        assert!(matches!(result, Err(SamlError::InvalidAssertion(_))));
    }
}
