//! `X509`: an entity presenting a certificate issued by a trusted authority.
//!
//! The certificate is decoded when the data is parsed, so a value of
//! [`X509AuthenticationData`] always holds a well-formed certificate. Trust
//! and validity are only checked when a crypto context is requested.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::future::BoxFuture;
use jsonwebtoken::{Algorithm, DecodingKey};
use tracing::{debug, warn};
use x509_parser::certificate::X509Certificate;
use x509_parser::parse_x509_certificate;
use x509_parser::public_key::PublicKey;

use super::factory::{check_entity, wrong_data};
use super::{EntityAuthenticationData, EntityAuthenticationFactory, EntityAuthenticationScheme};
use crate::context::MslContext;
use crate::crypto::{CryptoContext, SignatureCryptoContext};
use crate::error::{AuthError, FactoryError, InternalError, MslError};
use crate::io::{Document, EncoderFactory};
use crate::keys::X509Store;
use crate::util::AuthenticationUtils;

const KEY_X509_CERT: &str = "x509certificate";

/// X.509 entity authentication data. The identity is the subject DN.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct X509AuthenticationData {
    der: Vec<u8>,
    subject: String,
}

impl X509AuthenticationData {
    /// Create data from a DER-encoded certificate.
    ///
    /// # Errors
    /// Returns `Crypto(X509CertParseError)` if `der` is not exactly one
    /// certificate.
    pub fn new(der: Vec<u8>) -> Result<Self, AuthError> {
        let subject = {
            let cert = decode(&der)?;
            cert.subject().to_string()
        };
        Ok(Self { der, subject })
    }

    /// The subject distinguished name.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.subject
    }

    /// DER bytes of the certificate.
    #[must_use]
    pub fn certificate(&self) -> &[u8] {
        &self.der
    }

    #[must_use]
    pub fn auth_data(&self, encoder: &EncoderFactory) -> Document {
        let mut authdata = encoder.create_object();
        authdata.put_bytes(KEY_X509_CERT, &self.der);
        authdata
    }

    /// # Errors
    /// Returns `Encoding(ParseError)` if `x509certificate` is missing or not a
    /// string, and `Crypto(X509CertParseError)` if it is not base64 DER.
    pub fn parse(authdata: &Document) -> Result<Self, AuthError> {
        let encoded = authdata.get_string(KEY_X509_CERT)?;
        let der = STANDARD.decode(encoded).map_err(|_| {
            AuthError::crypto(MslError::X509CertParseError).with_detail("certificate is not base64")
        })?;
        Self::new(der)
    }
}

impl fmt::Debug for X509AuthenticationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X509AuthenticationData")
            .field("subject", &self.subject)
            .field("der_len", &self.der.len())
            .finish()
    }
}

fn decode(der: &[u8]) -> Result<X509Certificate<'_>, AuthError> {
    let (rest, cert) = parse_x509_certificate(der).map_err(|e| {
        AuthError::crypto(MslError::X509CertParseError).with_detail(e.to_string())
    })?;
    if !rest.is_empty() {
        return Err(AuthError::crypto(MslError::X509CertParseError)
            .with_detail("trailing bytes after certificate"));
    }
    Ok(cert)
}

/// Accepts certificates within their validity period that chain to a trust
/// anchor in the [`X509Store`], and returns a verify-only context over the
/// certificate's public key.
pub struct X509AuthenticationFactory {
    store: Arc<X509Store>,
    utils: Arc<dyn AuthenticationUtils>,
}

impl X509AuthenticationFactory {
    #[must_use]
    pub fn new(store: Arc<X509Store>, utils: Arc<dyn AuthenticationUtils>) -> Self {
        Self { store, utils }
    }
}

impl EntityAuthenticationFactory for X509AuthenticationFactory {
    fn scheme(&self) -> EntityAuthenticationScheme {
        EntityAuthenticationScheme::X509
    }

    fn create_data<'a>(
        &'a self,
        _ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<EntityAuthenticationData, AuthError>> {
        Box::pin(async move {
            let data = X509AuthenticationData::parse(authdata)?;
            Ok(EntityAuthenticationData::X509(data))
        })
    }

    #[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected
    fn get_crypto_context<'a>(
        &'a self,
        _ctx: &'a MslContext,
        data: &'a EntityAuthenticationData,
    ) -> BoxFuture<'a, Result<Arc<dyn CryptoContext>, FactoryError>> {
        Box::pin(async move {
            let EntityAuthenticationData::X509(data) = data else {
                return Err(wrong_data(self.scheme(), data));
            };
            check_entity(self.utils.as_ref(), data.identity(), self.scheme())?;

            // Signature verification is CPU-bound; keep it off the async workers.
            let store = Arc::clone(&self.store);
            let der = data.der.clone();
            let identity = data.subject.clone();
            let task = tokio::task::spawn_blocking(move || verify(&store, &der, &identity));
            let verified = task.await.map_err(|e| {
                InternalError::new(format!("certificate verification task failed: {e}"))
            })?;
            let crypto = verified
                .map_err(|e| e.with_scheme(EntityAuthenticationScheme::X509.name()))
                .inspect_err(|e| warn!("rejected X.509 entity: {e}"))?;

            debug!("derived X.509 context for {}", data.identity());
            Ok(Arc::new(crypto) as Arc<dyn CryptoContext>)
        })
    }
}

fn verify(
    store: &X509Store,
    der: &[u8],
    identity: &str,
) -> Result<SignatureCryptoContext, AuthError> {
    let cert = decode(der)?;
    if !cert.validity().is_valid() {
        return Err(AuthError::entity(MslError::X509CertExpired).with_detail(identity));
    }
    if !store.is_trusted(&cert) {
        return Err(AuthError::entity(MslError::X509CertVerificationFailed).with_detail(identity));
    }
    let (algorithm, key) = verifying_key(&cert)?;
    Ok(SignatureCryptoContext::new(identity, algorithm, key, None))
}

fn verifying_key(cert: &X509Certificate<'_>) -> Result<(Algorithm, DecodingKey), AuthError> {
    match cert.public_key().parsed() {
        Ok(PublicKey::RSA(rsa)) => Ok((
            Algorithm::RS256,
            DecodingKey::from_rsa_raw_components(rsa.modulus, rsa.exponent),
        )),
        Ok(PublicKey::EC(point)) => Ok((Algorithm::ES256, DecodingKey::from_ec_der(point.data()))),
        Ok(_) => Err(AuthError::crypto(MslError::InvalidKey)
            .with_detail("unsupported certificate public key algorithm")),
        Err(e) => Err(AuthError::crypto(MslError::InvalidKey).with_detail(e.to_string())),
    }
}
