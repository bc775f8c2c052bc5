//! X.509 entity authentication against the trust store.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::e2e_tests::helpers::*;
use crate::entityauth::{EntityAuthenticationData, X509AuthenticationData};
use crate::error::AuthError;

fn x509_envelope(pem: &str) -> Vec<u8> {
    let encoded = STANDARD.encode(fixtures::certificate_der(pem));
    envelope("X509", &format!(r#"{{"x509certificate":"{encoded}"}}"#))
}

#[test]
fn test_issued_certificate_from_wire() {
    let test = TestHarness::new();
    let data = test
        .parse_entity(&x509_envelope(fixtures::X509_LEAF_CERT))
        .expect("valid certificate");

    assert!(data.identity().contains("CN=X509-ESN-2"));
    assert!(test.crypto_context(&data).is_ok());
}

#[test]
fn test_expired_certificate() {
    let test = TestHarness::new();
    let data = test
        .parse_entity(&x509_envelope(fixtures::X509_EXPIRED_CERT))
        .expect("expired certificates still parse");

    let err = test.crypto_context(&data).unwrap_err();
    assert_eq!(rejected(&err).error(), MslError::X509CertExpired);
}

#[test]
fn test_untrusted_certificate() {
    let test = TestHarness::new();
    let data = test
        .parse_entity(&x509_envelope(fixtures::X509_UNTRUSTED_CERT))
        .expect("valid certificate");

    let err = test.crypto_context(&data).unwrap_err();
    let err = rejected(&err);
    assert!(matches!(err, AuthError::EntityAuth(_)));
    assert_eq!(err.error(), MslError::X509CertVerificationFailed);
}

#[test]
fn test_revoked_subject() {
    let test = TestHarness::new();
    let data = EntityAuthenticationData::X509(
        X509AuthenticationData::new(fixtures::certificate_der(fixtures::X509_LEAF_CERT))
            .expect("valid certificate"),
    );
    test.stores.utils.revoke_entity(data.identity());

    let err = test.crypto_context(&data).unwrap_err();
    assert_eq!(rejected(&err).error(), MslError::EntityRevoked);
}

#[test]
fn test_corrupt_certificate() {
    let test = TestHarness::new();
    let mut der = fixtures::certificate_der(fixtures::X509_LEAF_CERT);
    der.truncate(der.len() / 2);
    let bytes = envelope(
        "X509",
        &format!(r#"{{"x509certificate":"{}"}}"#, STANDARD.encode(der)),
    );

    let err = test.parse_entity(&bytes).unwrap_err();
    assert!(matches!(err, AuthError::Crypto(_)));
    assert_eq!(err.error(), MslError::X509CertParseError);
    assert_eq!(err.failure().scheme(), Some("X509"));
}
