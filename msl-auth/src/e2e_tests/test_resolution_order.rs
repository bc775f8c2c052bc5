//! Test that the scheme is resolved and its factory found before `authdata`
//! is read.

use crate::e2e_tests::helpers::*;
use crate::entityauth::EntityAuthenticationScheme;
use crate::error::AuthError;
use crate::userauth::UserAuthenticationScheme;

#[test]
fn test_unknown_entity_scheme_without_authdata() {
    let test = TestHarness::new();
    let err = test.parse_entity(br#"{"scheme":"KERBEROS"}"#).unwrap_err();
    assert!(matches!(err, AuthError::EntityAuth(_)));
    assert_eq!(err.error(), MslError::UnidentifiedEntityAuthScheme);
    assert_eq!(err.failure().detail(), Some("KERBEROS"));
}

#[test]
fn test_unknown_user_scheme_with_malformed_authdata() {
    let test = TestHarness::new();
    let err = test
        .parse_user(br#"{"scheme":"EMAIL_PASSWORD_X","authdata":"user@example.com"}"#)
        .unwrap_err();
    assert_eq!(err.error(), MslError::UnidentifiedUserAuthScheme);
}

#[test]
fn test_removed_entity_factory_without_authdata() {
    let test = TestHarness::new();
    test.ctx
        .remove_entity_authentication_factory(EntityAuthenticationScheme::Ecc);

    let err = test.parse_entity(br#"{"scheme":"ECC"}"#).unwrap_err();
    assert!(matches!(err, AuthError::EntityAuth(_)));
    assert_eq!(err.error(), MslError::EntityAuthFactoryNotFound);
}

#[test]
fn test_removed_user_factory_without_authdata() {
    let test = TestHarness::new();
    test.ctx
        .remove_user_authentication_factory(UserAuthenticationScheme::EmailPassword);

    let err = test.parse_user(br#"{"scheme":"EMAIL_PASSWORD"}"#).unwrap_err();
    assert_eq!(err.error(), MslError::UserAuthFactoryNotFound);
}

#[test]
fn test_registered_scheme_without_authdata() {
    let test = TestHarness::new();
    let err = test.parse_entity(br#"{"scheme":"ECC"}"#).unwrap_err();
    assert!(matches!(err, AuthError::Encoding(_)));
    assert_eq!(err.error(), MslError::ParseError);
}
