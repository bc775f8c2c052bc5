//! Key and certificate fixtures generated with OpenSSL.
//!
//! `x509_trusted.pem` is self-signed with `ecc_private.pem`; `x509_leaf.pem`
//! and `x509_expired.pem` are issued by it. `x509_untrusted.pem` is an
//! unrelated self-signed certificate.

use x509_parser::pem::Pem;

pub const ECC_PRIVATE_KEY: &str = include_str!("fixtures/ecc_private.pem");
pub const ECC_PUBLIC_KEY: &str = include_str!("fixtures/ecc_public.pem");
pub const RSA_PRIVATE_KEY: &str = include_str!("fixtures/rsa_private.pem");
pub const RSA_PUBLIC_KEY: &str = include_str!("fixtures/rsa_public.pem");
pub const X509_TRUSTED_CERT: &str = include_str!("fixtures/x509_trusted.pem");
pub const X509_LEAF_CERT: &str = include_str!("fixtures/x509_leaf.pem");
pub const X509_EXPIRED_CERT: &str = include_str!("fixtures/x509_expired.pem");
pub const X509_UNTRUSTED_CERT: &str = include_str!("fixtures/x509_untrusted.pem");

/// DER bytes of the first certificate in `pem`.
pub fn certificate_der(pem: &str) -> Vec<u8> {
    Pem::iter_from_buffer(pem.as_bytes())
        .next()
        .expect("fixture contains a PEM block")
        .expect("fixture PEM is well formed")
        .contents
}
