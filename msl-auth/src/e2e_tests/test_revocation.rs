//! Revoked entities are rejected by every scheme that consults the policy.

use crate::e2e_tests::helpers::*;
use crate::entityauth::{
    EccAuthenticationData, EntityAuthenticationData, EntityAuthenticationScheme,
    UnauthenticatedAuthenticationData, UnauthenticatedSuffixedAuthenticationData,
};
use crate::error::AuthError;

#[test]
fn test_revoked_entity_is_rejected() {
    let test = TestHarness::new();
    test.stores.utils.revoke_entity(ECC_ESN);
    let data = EntityAuthenticationData::Ecc(EccAuthenticationData::new(ECC_ESN, ECC_PUBKEY_ID));

    // Parsing does not consult the policy.
    assert!(test.parse_entity(&test.encode_entity(&data)).is_ok());

    let err = test.crypto_context(&data).unwrap_err();
    let err = rejected(&err);
    assert!(matches!(err, AuthError::EntityAuth(_)));
    assert_eq!(err.error(), MslError::EntityRevoked);
    assert_eq!(err.failure().scheme(), Some("ECC"));
}

#[test]
fn test_restored_entity_is_accepted() {
    let test = TestHarness::new();
    let data = EntityAuthenticationData::Unauthenticated(UnauthenticatedAuthenticationData::new(
        UNAUTHENTICATED_ESN,
    ));

    test.stores.utils.revoke_entity(UNAUTHENTICATED_ESN);
    assert!(test.crypto_context(&data).is_err());

    test.stores.utils.restore_entity(UNAUTHENTICATED_ESN);
    assert!(test.crypto_context(&data).is_ok());
}

#[test]
fn test_forbidden_scheme_is_incorrect_data() {
    let test = TestHarness::new();
    test.stores
        .utils
        .forbid_scheme(ECC_ESN, EntityAuthenticationScheme::Ecc);
    let data = EntityAuthenticationData::Ecc(EccAuthenticationData::new(ECC_ESN, ECC_PUBKEY_ID));

    let err = test.crypto_context(&data).unwrap_err();
    assert_eq!(rejected(&err).error(), MslError::IncorrectEntityAuthData);
}

#[test]
fn test_suffixed_scheme_ignores_policy() {
    let test = TestHarness::new();
    let data = EntityAuthenticationData::UnauthenticatedSuffixed(
        UnauthenticatedSuffixedAuthenticationData::new(SUFFIXED_ROOT, SUFFIXED_SUFFIX),
    );
    test.stores.utils.revoke_entity(data.identity());

    assert!(test.crypto_context(&data).is_ok());
}
