//! Shared test scaffolding: fixtures and a fully populated context.

pub mod fixtures;

use std::sync::Arc;

use crate::context::MslContext;
use crate::entityauth::{
    EccAuthenticationFactory, PresharedAuthenticationFactory, RsaAuthenticationFactory,
    UnauthenticatedAuthenticationFactory, UnauthenticatedSuffixedAuthenticationFactory,
    X509AuthenticationFactory,
};
use crate::keys::{KeyType, PresharedKeys, StaticKeyPairStore, StaticPresharedKeyStore, X509Store};
use crate::userauth::{EmailPasswordAuthenticationFactory, StaticEmailPasswordStore};
use crate::util::StaticAuthenticationUtils;

pub const ECC_ESN: &str = "ECC-ESN-1";
pub const ECC_PUBKEY_ID: &str = "ECC-KEY-1";
pub const RSA_ESN: &str = "RSA-ESN-1";
pub const RSA_PUBKEY_ID: &str = "RSA-KEY-1";
pub const PSK_ESN: &str = "PSK-ESN-1";
pub const UNAUTHENTICATED_ESN: &str = "NONE-ESN-1";
pub const SUFFIXED_ROOT: &str = "NONE-ROOT";
pub const SUFFIXED_SUFFIX: &str = "1";
pub const EMAIL: &str = "user@example.com";
pub const PASSWORD: &str = "correct horse battery staple";
pub const USER_ID: &str = "user-1";

/// Stores and policy backing a [`test_context`].
pub struct TestStores {
    pub ecc: Arc<StaticKeyPairStore>,
    pub rsa: Arc<StaticKeyPairStore>,
    pub psk: Arc<StaticPresharedKeyStore>,
    pub x509: Arc<X509Store>,
    pub users: Arc<StaticEmailPasswordStore>,
    pub utils: Arc<StaticAuthenticationUtils>,
}

/// Build stores with one known key or credential per scheme.
pub fn test_stores() -> TestStores {
    let ecc = Arc::new(StaticKeyPairStore::new(KeyType::Ec));
    ecc.add_public_pem(ECC_PUBKEY_ID, fixtures::ECC_PUBLIC_KEY)
        .expect("valid ECC public key");
    ecc.add_private_pem(ECC_PUBKEY_ID, fixtures::ECC_PRIVATE_KEY)
        .expect("valid ECC private key");

    let rsa = Arc::new(StaticKeyPairStore::new(KeyType::Rsa));
    rsa.add_public_pem(RSA_PUBKEY_ID, fixtures::RSA_PUBLIC_KEY)
        .expect("valid RSA public key");

    let psk = Arc::new(StaticPresharedKeyStore::new());
    psk.add(
        PSK_ESN,
        PresharedKeys::new(vec![0x11; 16], vec![0x22; 32]).expect("non-empty keys"),
    )
    .expect("valid identity");

    let x509 = Arc::new(X509Store::new());
    x509.add_trusted_pem(fixtures::X509_TRUSTED_CERT.as_bytes())
        .expect("valid trust anchor");

    let users = Arc::new(StaticEmailPasswordStore::new());
    users
        .add_user(EMAIL, PASSWORD, USER_ID)
        .expect("valid credentials");

    TestStores {
        ecc,
        rsa,
        psk,
        x509,
        users,
        utils: Arc::new(StaticAuthenticationUtils::new()),
    }
}

/// A context with every scheme registered against `stores`.
pub fn context_with(stores: &TestStores) -> MslContext {
    let utils = Arc::clone(&stores.utils);
    MslContext::builder()
        .entity_factory(Arc::new(UnauthenticatedAuthenticationFactory::new(utils.clone())))
        .entity_factory(Arc::new(UnauthenticatedSuffixedAuthenticationFactory::new()))
        .entity_factory(Arc::new(PresharedAuthenticationFactory::new(
            stores.psk.clone(),
            utils.clone(),
        )))
        .entity_factory(Arc::new(RsaAuthenticationFactory::new(stores.rsa.clone(), utils.clone())))
        .entity_factory(Arc::new(EccAuthenticationFactory::new(stores.ecc.clone(), utils.clone())))
        .entity_factory(Arc::new(X509AuthenticationFactory::new(
            stores.x509.clone(),
            utils.clone(),
        )))
        .user_factory(Arc::new(EmailPasswordAuthenticationFactory::new(
            stores.users.clone(),
            utils,
        )))
        .build()
}

/// A context with every scheme registered against fresh [`test_stores`].
pub fn test_context() -> MslContext {
    context_with(&test_stores())
}
