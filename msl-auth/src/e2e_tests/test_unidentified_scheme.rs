//! Test that unrecognized scheme names are rejected before any lookup.

use crate::e2e_tests::helpers::*;
use crate::error::{AuthError, Classification};

#[test]
fn test_unidentified_user_scheme() {
    let test = TestHarness::new();
    let err = test
        .parse_user(br#"{"scheme":"EMAIL_PASSWORD_X","authdata":{}}"#)
        .unwrap_err();

    assert!(matches!(err, AuthError::UserAuth(_)));
    assert_eq!(err.error(), MslError::UnidentifiedUserAuthScheme);
    assert_eq!(err.classification(), Classification::UnknownScheme);
    assert_eq!(err.failure().detail(), Some("EMAIL_PASSWORD_X"));
}

#[test]
fn test_unidentified_entity_scheme() {
    let test = TestHarness::new();
    for name in ["ECC_X", "ecc", "", "EMAIL_PASSWORD"] {
        let err = test.parse_entity(&envelope(name, "{}")).unwrap_err();
        assert!(matches!(err, AuthError::EntityAuth(_)));
        assert_eq!(
            err.error(),
            MslError::UnidentifiedEntityAuthScheme,
            "name {name:?}"
        );
    }
}

#[test]
fn test_entity_scheme_is_not_a_user_scheme() {
    let test = TestHarness::new();
    let err = test.parse_user(&envelope("ECC", ECC_AUTHDATA)).unwrap_err();
    assert_eq!(err.error(), MslError::UnidentifiedUserAuthScheme);
}
