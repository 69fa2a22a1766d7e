//! Assertion generation integration tests.
//!
//! Drives the public API end to end: authentication token in, assertion and
//! XML out.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sidp_core::{Config, FixedTimeService, RandomIdService, SystemTimeService, ValidityAnchor};
use sidp_protocol_saml::types::confirmation_methods;
use sidp_protocol_saml::{
    xml, AssertionGenerator, AuthenticationToken, GeneratorSettings, Principal,
    WebAuthenticationDetails,
};

const IDP: &str = "https://idp.example.com/saml";
const ACS: &str = "https://sp.example.com/acs";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 3, 14, 0, 0).unwrap()
}

fn alice() -> AuthenticationToken {
    AuthenticationToken::new(
        Principal::new("alice"),
        WebAuthenticationDetails::new("192.0.2.44").with_session_id("SESSION-9"),
    )
    .with_authority("ROLE_USER")
    .with_authority("ROLE_AUDITOR")
}

fn fixed_generator(settings: &GeneratorSettings) -> AssertionGenerator<FixedTimeService, RandomIdService> {
    AssertionGenerator::with_settings(
        IDP,
        settings,
        Arc::new(FixedTimeService::new(now())),
        Arc::new(RandomIdService::new()),
    )
}

#[test]
fn test_assertion_is_fully_populated() {
    let authn_instant = now() - Duration::seconds(5);
    let assertion = fixed_generator(&GeneratorSettings::default())
        .generate_assertion(&alice(), ACS, 300, Some("req-123"), authn_instant)
        .unwrap();

    assert!(!assertion.id.is_empty());
    assert_eq!(assertion.version, "2.0");
    assert_eq!(assertion.issue_instant, now());
    assert_eq!(assertion.issuer.value, IDP);

    assert_eq!(assertion.subject.name_id.value, "alice");
    assert_eq!(assertion.subject.subject_confirmations.len(), 1);
    let confirmation = &assertion.subject.subject_confirmations[0];
    assert_eq!(confirmation.method, confirmation_methods::BEARER);

    let data = assertion.bearer_confirmation_data().unwrap();
    assert_eq!(data.recipient.as_deref(), Some(ACS));
    assert_eq!(data.in_response_to.as_deref(), Some("req-123"));
    assert_eq!(data.address.as_deref(), Some("192.0.2.44"));
    assert_eq!(data.not_on_or_after, Some(now() + Duration::seconds(300)));

    assert_eq!(assertion.authn_statement.authn_instant, authn_instant);
    assert_eq!(assertion.authn_statement.session_index.as_deref(), Some("SESSION-9"));

    assert_eq!(assertion.attribute_statement.attributes.len(), 1);
    assert_eq!(
        assertion.attribute_statement.attributes[0].values,
        vec!["ROLE_USER", "ROLE_AUDITOR"]
    );
}

#[test]
fn test_identifiers_are_unique_per_call() {
    let generator = fixed_generator(&GeneratorSettings::default());
    let ids: HashSet<String> = (0..50)
        .map(|_| {
            generator
                .generate_assertion(&alice(), ACS, 60, None, now())
                .unwrap()
                .id
        })
        .collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_zero_validity_expires_at_anchor() {
    let authn_instant = now() - Duration::minutes(3);

    let issue_anchored = fixed_generator(&GeneratorSettings::default())
        .generate_assertion(&alice(), ACS, 0, Some("req-0"), authn_instant)
        .unwrap();
    assert_eq!(
        issue_anchored.bearer_confirmation_data().unwrap().not_on_or_after,
        Some(now())
    );

    let settings = GeneratorSettings {
        validity_anchor: ValidityAnchor::AuthnInstant,
        ..GeneratorSettings::default()
    };
    let authn_anchored = fixed_generator(&settings)
        .generate_assertion(&alice(), ACS, 0, Some("req-0"), authn_instant)
        .unwrap();
    assert_eq!(
        authn_anchored.bearer_confirmation_data().unwrap().not_on_or_after,
        Some(authn_instant)
    );
}

#[test]
fn test_authorities_map_one_to_one() {
    let generator = fixed_generator(&GeneratorSettings::default());

    let none = AuthenticationToken::new(Principal::new("bob"), WebAuthenticationDetails::new("::1"));
    let assertion = generator.generate_assertion(&none, ACS, 60, None, now()).unwrap();
    assert!(assertion.attribute_statement.attributes[0].values.is_empty());

    let many = (0..10).fold(
        AuthenticationToken::new(Principal::new("bob"), WebAuthenticationDetails::new("::1")),
        |token, i| token.with_authority(format!("ROLE_{i}")),
    );
    let assertion = generator.generate_assertion(&many, ACS, 60, None, now()).unwrap();
    let expected: Vec<String> = (0..10).map(|i| format!("ROLE_{i}")).collect();
    assert_eq!(assertion.attribute_statement.attributes[0].values, expected);
}

#[test]
fn test_system_clock_sets_issue_instant() {
    let generator = AssertionGenerator::new(
        IDP,
        Arc::new(SystemTimeService::new()),
        Arc::new(RandomIdService::new()),
    );

    let before = Utc::now();
    let assertion = generator
        .generate_assertion(&alice(), ACS, 120, Some("req-9"), before)
        .unwrap();
    let after = Utc::now();

    assert!(assertion.issue_instant >= before && assertion.issue_instant <= after);
    assert_eq!(
        assertion.bearer_confirmation_data().unwrap().not_on_or_after,
        Some(assertion.issue_instant + Duration::seconds(120))
    );
}

#[test]
fn test_generator_from_configuration_file() {
    let config = Config::from_toml_str(
        r#"
        [saml]
        issuer = "https://idp.example.net"
        validity_anchor = "authn_instant"
        name_id_format = "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress"
        authorities_attribute_name = "Roles"
        "#,
    )
    .unwrap();

    let generator = AssertionGenerator::from_config(
        &config.saml,
        Arc::new(FixedTimeService::new(now())),
        Arc::new(RandomIdService::new()),
    )
    .unwrap();

    let authn_instant = now() - Duration::seconds(30);
    let assertion = generator
        .generate_assertion(&alice(), ACS, config.saml.valid_for_seconds, None, authn_instant)
        .unwrap();

    assert_eq!(assertion.issuer.value, "https://idp.example.net");
    assert_eq!(
        assertion.subject.name_id.format.as_deref(),
        Some("urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress")
    );
    assert!(assertion.attribute_statement.attribute("Roles").is_some());
    assert_eq!(
        assertion.bearer_confirmation_data().unwrap().not_on_or_after,
        Some(authn_instant + Duration::seconds(300))
    );
}

#[test]
fn test_generated_assertion_serializes() {
    let assertion = fixed_generator(&GeneratorSettings::default())
        .generate_assertion(&alice(), ACS, 300, Some("req-123"), now())
        .unwrap();

    let compact = xml::to_xml(&assertion).unwrap();
    assert!(compact.contains(&format!(r#"ID="{}""#, assertion.id)));
    assert!(compact.contains(r#"Recipient="https://sp.example.com/acs""#));
    assert!(compact.contains(r#"InResponseTo="req-123""#));
    assert!(compact.contains(r#"NotOnOrAfter="2025-02-03T14:05:00.000Z""#));
    assert!(compact.contains(">ROLE_AUDITOR</saml:AttributeValue>"));

    let json = serde_json::to_value(&assertion).unwrap();
    assert_eq!(json["issuer"]["value"], IDP);
    assert_eq!(json["subject"]["name_id"]["value"], "alice");
}
