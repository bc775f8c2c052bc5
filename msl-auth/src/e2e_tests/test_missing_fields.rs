//! Test that missing or wrongly typed mandatory fields are rejected.

use crate::e2e_tests::helpers::*;
use crate::error::AuthError;

fn assert_parse_error(err: &AuthError) {
    assert!(matches!(err, AuthError::Encoding(_)), "got {err}");
    assert_eq!(err.error(), MslError::ParseError);
}

#[test]
fn test_missing_scheme() {
    let test = TestHarness::new();
    let err = test
        .parse_entity(br#"{"authdata":{"identity":"NONE-ESN-1"}}"#)
        .unwrap_err();
    assert_parse_error(&err);
}

#[test]
fn test_missing_authdata() {
    let test = TestHarness::new();
    assert_parse_error(&test.parse_entity(br#"{"scheme":"NONE"}"#).unwrap_err());
    assert_parse_error(&test.parse_user(br#"{"scheme":"EMAIL_PASSWORD"}"#).unwrap_err());
}

#[test]
fn test_wrongly_typed_envelope() {
    let test = TestHarness::new();
    assert_parse_error(&test.parse_entity(br#"{"scheme":7,"authdata":{}}"#).unwrap_err());
    assert_parse_error(
        &test
            .parse_entity(br#"{"scheme":"NONE","authdata":"identity"}"#)
            .unwrap_err(),
    );
}

#[test]
fn test_every_mandatory_entity_field() {
    let test = TestHarness::new();
    let cases = [
        ("NONE", r"{}"),
        ("NONE_SUFFIXED", r#"{"suffix":"1"}"#),
        ("NONE_SUFFIXED", r#"{"root":"NONE-ROOT"}"#),
        ("PSK", r"{}"),
        ("RSA", r#"{"pubkeyid":"RSA-KEY-1"}"#),
        ("RSA", r#"{"identity":"RSA-ESN-1"}"#),
        ("ECC", r#"{"pubkeyid":"ECC-KEY-1"}"#),
        ("ECC", r#"{"identity":"ECC-ESN-1"}"#),
        ("X509", r"{}"),
    ];
    for (scheme, authdata) in cases {
        let err = test.parse_entity(&envelope(scheme, authdata)).unwrap_err();
        assert_parse_error(&err);
        assert_eq!(err.failure().scheme(), Some(scheme));
    }
}

#[test]
fn test_every_mandatory_user_field() {
    let test = TestHarness::new();
    for authdata in [r#"{"password":"pw"}"#, r#"{"email":"user@example.com"}"#] {
        let err = test
            .parse_user(&envelope("EMAIL_PASSWORD", authdata))
            .unwrap_err();
        assert_parse_error(&err);
    }
}

#[test]
fn test_wrongly_typed_field() {
    let test = TestHarness::new();
    let err = test
        .parse_entity(&envelope("ECC", r#"{"identity":1,"pubkeyid":"ECC-KEY-1"}"#))
        .unwrap_err();
    assert_parse_error(&err);
}

#[test]
fn test_not_an_object() {
    let test = TestHarness::new();
    assert_parse_error(&test.parse_entity(b"[]").unwrap_err());
    assert_parse_error(&test.parse_entity(b"not json").unwrap_err());
}
