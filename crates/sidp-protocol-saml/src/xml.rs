//! SAML assertion XML serialization.
//!
//! Writes assertions as SAML 2.0 `saml:Assertion` elements. Output is plain
//! XML; signing and canonicalization happen downstream.

use std::io::{Cursor, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::SamlResult;
use crate::types::{
    Assertion, Attribute, AttributeStatement, AuthnStatement, Issuer, NameId, Subject,
    SubjectConfirmation, SubjectConfirmationData, SAML_NS, XSI_NS, XS_NS,
};

/// Serializes an assertion as a compact XML fragment.
pub fn to_xml(assertion: &Assertion) -> SamlResult<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_assertion(&mut writer, assertion)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Serializes an assertion as an indented XML document with declaration.
pub fn to_pretty_xml(assertion: &Assertion) -> SamlResult<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_assertion(&mut writer, assertion)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Writes an assertion to any XML writer.
pub fn write_assertion<W: Write>(writer: &mut Writer<W>, assertion: &Assertion) -> SamlResult<()> {
    let mut root = BytesStart::new("saml:Assertion");
    root.push_attribute(("xmlns:saml", SAML_NS));
    root.push_attribute(("xmlns:xs", XS_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("ID", assertion.id.as_str()));
    root.push_attribute(("IssueInstant", timestamp(assertion.issue_instant).as_str()));
    root.push_attribute(("Version", assertion.version.as_str()));
    writer.write_event(Event::Start(root))?;

    write_issuer(writer, &assertion.issuer)?;
    write_subject(writer, &assertion.subject)?;
    write_authn_statement(writer, &assertion.authn_statement)?;
    write_attribute_statement(writer, &assertion.attribute_statement)?;

    writer.write_event(Event::End(BytesEnd::new("saml:Assertion")))?;
    Ok(())
}

fn write_issuer<W: Write>(writer: &mut Writer<W>, issuer: &Issuer) -> SamlResult<()> {
    let mut start = BytesStart::new("saml:Issuer");
    if let Some(format) = &issuer.format {
        start.push_attribute(("Format", format.as_str()));
    }
    write_text_element(writer, start, &issuer.value)
}

fn write_subject<W: Write>(writer: &mut Writer<W>, subject: &Subject) -> SamlResult<()> {
    writer.write_event(Event::Start(BytesStart::new("saml:Subject")))?;
    write_name_id(writer, &subject.name_id)?;
    for confirmation in &subject.subject_confirmations {
        write_subject_confirmation(writer, confirmation)?;
    }
    writer.write_event(Event::End(BytesEnd::new("saml:Subject")))?;
    Ok(())
}

fn write_name_id<W: Write>(writer: &mut Writer<W>, name_id: &NameId) -> SamlResult<()> {
    let mut start = BytesStart::new("saml:NameID");
    if let Some(format) = &name_id.format {
        start.push_attribute(("Format", format.as_str()));
    }
    write_text_element(writer, start, &name_id.value)
}

fn write_subject_confirmation<W: Write>(
    writer: &mut Writer<W>,
    confirmation: &SubjectConfirmation,
) -> SamlResult<()> {
    let mut start = BytesStart::new("saml:SubjectConfirmation");
    start.push_attribute(("Method", confirmation.method.as_str()));

    match &confirmation.subject_confirmation_data {
        Some(data) => {
            writer.write_event(Event::Start(start))?;
            write_subject_confirmation_data(writer, data)?;
            writer.write_event(Event::End(BytesEnd::new("saml:SubjectConfirmation")))?;
        }
        None => writer.write_event(Event::Empty(start))?,
    }
    Ok(())
}

fn write_subject_confirmation_data<W: Write>(
    writer: &mut Writer<W>,
    data: &SubjectConfirmationData,
) -> SamlResult<()> {
    let mut start = BytesStart::new("saml:SubjectConfirmationData");
    if let Some(not_before) = data.not_before {
        start.push_attribute(("NotBefore", timestamp(not_before).as_str()));
    }
    if let Some(not_on_or_after) = data.not_on_or_after {
        start.push_attribute(("NotOnOrAfter", timestamp(not_on_or_after).as_str()));
    }
    if let Some(recipient) = &data.recipient {
        start.push_attribute(("Recipient", recipient.as_str()));
    }
    if let Some(in_response_to) = &data.in_response_to {
        start.push_attribute(("InResponseTo", in_response_to.as_str()));
    }
    if let Some(address) = &data.address {
        start.push_attribute(("Address", address.as_str()));
    }
    writer.write_event(Event::Empty(start))?;
    Ok(())
}

fn write_authn_statement<W: Write>(writer: &mut Writer<W>, statement: &AuthnStatement) -> SamlResult<()> {
    let mut start = BytesStart::new("saml:AuthnStatement");
    start.push_attribute(("AuthnInstant", timestamp(statement.authn_instant).as_str()));
    if let Some(session_index) = &statement.session_index {
        start.push_attribute(("SessionIndex", session_index.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    writer.write_event(Event::Start(BytesStart::new("saml:AuthnContext")))?;
    if let Some(class_ref) = &statement.authn_context.authn_context_class_ref {
        write_text_element(writer, BytesStart::new("saml:AuthnContextClassRef"), class_ref)?;
    }
    writer.write_event(Event::End(BytesEnd::new("saml:AuthnContext")))?;

    writer.write_event(Event::End(BytesEnd::new("saml:AuthnStatement")))?;
    Ok(())
}

fn write_attribute_statement<W: Write>(
    writer: &mut Writer<W>,
    statement: &AttributeStatement,
) -> SamlResult<()> {
    writer.write_event(Event::Start(BytesStart::new("saml:AttributeStatement")))?;
    for attribute in &statement.attributes {
        write_attribute(writer, attribute)?;
    }
    writer.write_event(Event::End(BytesEnd::new("saml:AttributeStatement")))?;
    Ok(())
}

fn write_attribute<W: Write>(writer: &mut Writer<W>, attribute: &Attribute) -> SamlResult<()> {
    let mut start = BytesStart::new("saml:Attribute");
    start.push_attribute(("Name", attribute.name.as_str()));
    if let Some(format) = &attribute.name_format {
        start.push_attribute(("NameFormat", format.as_str()));
    }

    if attribute.values.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for value in &attribute.values {
        let mut value_start = BytesStart::new("saml:AttributeValue");
        value_start.push_attribute(("xsi:type", "xs:string"));
        write_text_element(writer, value_start, value)?;
    }
    writer.write_event(Event::End(BytesEnd::new("saml:Attribute")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, start: BytesStart<'_>, text: &str) -> SamlResult<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// Formats an instant as an `xs:dateTime` in UTC with millisecond precision.
fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use quick_xml::Reader;

    use super::*;
    use crate::types::AuthnContextClass;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn assertion(in_response_to: Option<&str>, authorities: Vec<String>) -> Assertion {
        let data = SubjectConfirmationData {
            in_response_to: in_response_to.map(str::to_string),
            not_on_or_after: Some(instant() + chrono::Duration::seconds(300)),
            not_before: None,
            recipient: Some("https://sp.example.com/acs?a=1&b=2".to_string()),
            address: Some("203.0.113.9".to_string()),
        };
        Assertion::new(
            "_a1b2",
            instant(),
            Issuer::entity("https://idp.example.com"),
            Subject::new(NameId::unspecified("alice"))
                .with_confirmation(SubjectConfirmation::bearer().with_data(data)),
            AuthnStatement::new(instant(), AuthnContextClass::PasswordProtectedTransport)
                .with_session_index("S-1"),
            AttributeStatement::new().with_attribute(Attribute::basic("Authorities", authorities)),
        )
    }

    fn element_names(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut names = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    names.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap());
                }
                Event::Eof => break,
                _ => {}
            }
        }
        names
    }

    #[test]
    fn writes_all_parts() {
        let xml = to_xml(&assertion(Some("req-123"), vec!["ROLE_USER".to_string()])).unwrap();

        assert!(xml.starts_with("<saml:Assertion "));
        assert!(xml.contains(r#"ID="_a1b2""#));
        assert!(xml.contains(r#"IssueInstant="2024-06-01T12:00:00.000Z""#));
        assert!(xml.contains(r#"Version="2.0""#));
        assert!(xml.contains(
            r#"<saml:Issuer Format="urn:oasis:names:tc:SAML:2.0:nameid-format:entity">https://idp.example.com</saml:Issuer>"#
        ));
        assert!(xml.contains(">alice</saml:NameID>"));
        assert!(xml.contains(r#"Method="urn:oasis:names:tc:SAML:2.0:cm:bearer""#));
        assert!(xml.contains(r#"NotOnOrAfter="2024-06-01T12:05:00.000Z""#));
        assert!(xml.contains(r#"InResponseTo="req-123""#));
        assert!(xml.contains(r#"Address="203.0.113.9""#));
        assert!(xml.contains(r#"AuthnInstant="2024-06-01T12:00:00.000Z""#));
        assert!(xml.contains(r#"SessionIndex="S-1""#));
        assert!(xml.contains(
            "<saml:AuthnContextClassRef>urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport</saml:AuthnContextClassRef>"
        ));
        assert!(xml.contains(r#"<saml:AttributeValue xsi:type="xs:string">ROLE_USER</saml:AttributeValue>"#));
        assert!(xml.ends_with("</saml:Assertion>"));
    }

    #[test]
    fn element_order_follows_schema() {
        let xml = to_xml(&assertion(Some("req-123"), vec!["A".to_string(), "B".to_string()])).unwrap();

        assert_eq!(
            element_names(&xml),
            vec![
                "saml:Assertion",
                "saml:Issuer",
                "saml:Subject",
                "saml:NameID",
                "saml:SubjectConfirmation",
                "saml:SubjectConfirmationData",
                "saml:AuthnStatement",
                "saml:AuthnContext",
                "saml:AuthnContextClassRef",
                "saml:AttributeStatement",
                "saml:Attribute",
                "saml:AttributeValue",
                "saml:AttributeValue",
            ]
        );
    }

    #[test]
    fn absent_correlation_is_omitted() {
        let xml = to_xml(&assertion(None, Vec::new())).unwrap();
        assert!(!xml.contains("InResponseTo"));
        assert!(!xml.contains("AttributeValue"));
    }

    #[test]
    fn special_characters_are_escaped() {
        let xml = to_xml(&assertion(None, vec!["<admin>".to_string()])).unwrap();

        assert!(xml.contains("&lt;admin&gt;"));
        assert!(xml.contains("acs?a=1&amp;b=2"));
        assert_eq!(element_names(&xml).len(), 12);
    }

    #[test]
    fn pretty_output_has_declaration() {
        let xml = to_pretty_xml(&assertion(Some("req-1"), vec!["ROLE_USER".to_string()])).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("\n  <saml:Issuer"));
        assert_eq!(element_names(&xml).first().map(String::as_str), Some("saml:Assertion"));
    }
}
