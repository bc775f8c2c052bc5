//! Equality between authentication data values.

use crate::e2e_tests::helpers::*;
use crate::entityauth::{
    EccAuthenticationData, EntityAuthenticationData, RsaAuthenticationData,
    UnauthenticatedAuthenticationData,
};

fn ecc(identity: &str, key: &str) -> EntityAuthenticationData {
    EntityAuthenticationData::Ecc(EccAuthenticationData::new(identity, key))
}

#[test]
fn test_reflexive_and_symmetric() {
    let a = ecc(ECC_ESN, ECC_PUBKEY_ID);
    let b = ecc(ECC_ESN, ECC_PUBKEY_ID);
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
}

#[test]
fn test_different_identity_or_key_not_equal() {
    let a = ecc(ECC_ESN, ECC_PUBKEY_ID);
    assert_ne!(a, ecc("ECC-ESN-2", ECC_PUBKEY_ID));
    assert_ne!(a, ecc(ECC_ESN, "ECC-KEY-2"));
}

#[test]
fn test_same_fields_different_scheme_not_equal() {
    let ecc_data = ecc(ECC_ESN, ECC_PUBKEY_ID);
    let rsa_data = RsaAuthenticationData::new(ECC_ESN, ECC_PUBKEY_ID);
    let rsa_data = EntityAuthenticationData::Rsa(rsa_data);
    let none_data = UnauthenticatedAuthenticationData::new(ECC_ESN);
    let none_data = EntityAuthenticationData::Unauthenticated(none_data);
    assert_ne!(ecc_data, rsa_data);
    assert_ne!(ecc_data, none_data);
    assert_eq!(ecc_data.identity(), none_data.identity());
}

#[test]
fn test_absent_data_not_equal() {
    let a = ecc(ECC_ESN, ECC_PUBKEY_ID);
    assert_ne!(Some(&a), None);
}

#[test]
fn test_parsed_equals_constructed() {
    let test = TestHarness::new();
    let parsed = test
        .parse_entity(&envelope("ECC", ECC_AUTHDATA))
        .expect("valid document");
    assert_eq!(parsed, ecc(ECC_ESN, ECC_PUBKEY_ID));
}
