//! Removing a factory makes a recognized scheme unavailable, not unknown.

use std::sync::Arc;

use crate::e2e_tests::helpers::*;
use crate::entityauth::{
    EntityAuthenticationScheme, UnauthenticatedSuffixedAuthenticationFactory,
};
use crate::error::{AuthError, Classification};
use crate::userauth::UserAuthenticationScheme;

const SUFFIXED: &[u8] =
    br#"{"scheme":"NONE_SUFFIXED","authdata":{"root":"NONE-ROOT","suffix":"1"}}"#;

#[test]
fn test_removed_entity_factory_then_reregistered() {
    let test = TestHarness::new();
    assert!(test.parse_entity(SUFFIXED).is_ok());

    test.ctx
        .remove_entity_authentication_factory(EntityAuthenticationScheme::NoneSuffixed);
    let err = test.parse_entity(SUFFIXED).unwrap_err();
    assert!(matches!(err, AuthError::EntityAuth(_)));
    assert_eq!(err.error(), MslError::EntityAuthFactoryNotFound);
    assert_eq!(err.classification(), Classification::Unavailable);

    let factory = UnauthenticatedSuffixedAuthenticationFactory::new();
    test.ctx.add_entity_authentication_factory(Arc::new(factory));
    let data = test.parse_entity(SUFFIXED).expect("factory registered again");
    assert_eq!(data.identity(), "NONE-ROOT.1");
}

#[test]
fn test_removed_user_factory() {
    let test = TestHarness::new();
    let bytes = envelope(
        "EMAIL_PASSWORD",
        r#"{"email":"user@example.com","password":"pw"}"#,
    );
    assert!(test.parse_user(&bytes).is_ok());

    test.ctx
        .remove_user_authentication_factory(UserAuthenticationScheme::EmailPassword);
    let err = test.parse_user(&bytes).unwrap_err();
    assert!(matches!(err, AuthError::UserAuth(_)));
    assert_eq!(err.error(), MslError::UserAuthFactoryNotFound);
}

#[test]
fn test_removal_only_affects_its_scheme() {
    let test = TestHarness::new();
    test.ctx
        .remove_entity_authentication_factory(EntityAuthenticationScheme::Rsa);

    let data = test
        .parse_entity(&envelope("ECC", ECC_AUTHDATA))
        .expect("ECC still registered");
    assert_eq!(data.scheme(), EntityAuthenticationScheme::Ecc);
}
