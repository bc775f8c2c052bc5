//! ECC entity authentication from wire bytes to crypto context.

use crate::e2e_tests::helpers::*;
use crate::entityauth::{
    EccAuthenticationData, EntityAuthenticationData, EntityAuthenticationScheme,
};
use crate::error::AuthError;

fn ecc_data() -> EntityAuthenticationData {
    EntityAuthenticationData::Ecc(EccAuthenticationData::new(ECC_ESN, ECC_PUBKEY_ID))
}

#[test]
fn test_ecc_round_trip() {
    let test = TestHarness::new();
    let data = ecc_data();

    let bytes = test.encode_entity(&data);
    let parsed = test.parse_entity(&bytes).expect("valid ECC document");

    assert_eq!(parsed, data);
    assert_eq!(parsed.scheme(), EntityAuthenticationScheme::Ecc);
    assert_eq!(parsed.identity(), ECC_ESN);
    assert_eq!(test.encode_entity(&parsed), bytes);
}

#[test]
fn test_ecc_from_handwritten_document() {
    let test = TestHarness::new();
    let bytes = envelope("ECC", r#"{"pubkeyid":"ECC-KEY-1","identity":"ECC-ESN-1"}"#);

    let parsed = test.parse_entity(&bytes).expect("valid ECC document");
    assert_eq!(parsed, ecc_data());
}

#[test]
fn test_ecc_crypto_context_with_resolvable_key() {
    let test = TestHarness::new();
    let crypto = test.crypto_context(&ecc_data()).expect("key is resolvable");

    let signature = crypto.sign(b"message").expect("private key present");
    assert_eq!(crypto.verify(b"message", &signature).ok(), Some(true));
}

#[test]
fn test_ecc_crypto_context_without_key() {
    let test = TestHarness::new();
    let data = EccAuthenticationData::new(ECC_ESN, "ECC-KEY-UNKNOWN");
    let data = EntityAuthenticationData::Ecc(data);

    let err = test.crypto_context(&data).unwrap_err();
    let err = rejected(&err);
    assert!(matches!(err, AuthError::EntityAuth(_)));
    assert_eq!(err.error(), MslError::EccPublicKeyNotFound);
}

#[test]
fn test_ecc_missing_pubkeyid_is_parse_error() {
    let test = TestHarness::new();
    let err = test
        .parse_entity(&envelope("ECC", r#"{"identity":"ECC-ESN-1"}"#))
        .unwrap_err();
    assert!(matches!(err, AuthError::Encoding(_)));
    assert_eq!(err.error(), MslError::ParseError);
}
