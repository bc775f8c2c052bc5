//! Handing a factory data of another scheme is a defect, not a rejection.

use crate::e2e_tests::helpers::*;
use crate::entityauth::{
    EccAuthenticationData, EntityAuthenticationData, EntityAuthenticationScheme,
    PresharedAuthenticationData,
};

#[test]
fn test_every_factory_rejects_foreign_data_as_internal() {
    let test = TestHarness::new();
    let ecc = EntityAuthenticationData::Ecc(EccAuthenticationData::new(ECC_ESN, ECC_PUBKEY_ID));
    let psk = EntityAuthenticationData::Psk(PresharedAuthenticationData::new(PSK_ESN));

    for scheme in EntityAuthenticationScheme::ALL {
        let foreign = if scheme == EntityAuthenticationScheme::Ecc { &psk } else { &ecc };
        let factory = test
            .ctx
            .entity_authentication_factory(scheme)
            .expect("registered");
        let err = test
            .runtime
            .block_on(factory.get_crypto_context(&test.ctx, foreign))
            .unwrap_err();
        assert!(err.is_internal(), "scheme {scheme}");
        assert!(err.as_rejected().is_none());
    }
}

#[test]
fn test_internal_error_names_both_schemes() {
    let test = TestHarness::new();
    let ecc = EntityAuthenticationData::Ecc(EccAuthenticationData::new(ECC_ESN, ECC_PUBKEY_ID));
    let factory = test
        .ctx
        .entity_authentication_factory(EntityAuthenticationScheme::Rsa)
        .expect("registered");

    let err = test
        .runtime
        .block_on(factory.get_crypto_context(&test.ctx, &ecc))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("RSA"));
    assert!(message.contains("ECC"));
}
