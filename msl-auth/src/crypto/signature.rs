use std::fmt;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use super::CryptoContext;
use crate::error::{AuthError, MslError};

/// Sign/verify crypto context backed by `jsonwebtoken` keys.
///
/// Holds a verification key and optionally a signing key. Encryption is not
/// supported.
#[derive(Clone)]
pub struct SignatureCryptoContext {
    id: String,
    algorithm: Algorithm,
    verifying_key: DecodingKey,
    signing_key: Option<EncodingKey>,
}

impl SignatureCryptoContext {
    /// Create a context for `algorithm`.
    ///
    /// `id` names the key for diagnostics; it must not be secret.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        algorithm: Algorithm,
        verifying_key: DecodingKey,
        signing_key: Option<EncodingKey>,
    ) -> Self {
        Self {
            id: id.into(),
            algorithm,
            verifying_key,
            signing_key,
        }
    }

    /// Create an HMAC-SHA256 context from a shared secret.
    #[must_use]
    pub fn hmac_sha256(id: impl Into<String>, secret: &[u8]) -> Self {
        Self::new(
            id,
            Algorithm::HS256,
            DecodingKey::from_secret(secret),
            Some(EncodingKey::from_secret(secret)),
        )
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }
}

impl fmt::Debug for SignatureCryptoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureCryptoContext")
            .field("id", &self.id)
            .field("algorithm", &self.algorithm)
            .field("can_sign", &self.can_sign())
            .finish_non_exhaustive()
    }
}

impl CryptoContext for SignatureCryptoContext {
    fn encrypt(&self, _data: &[u8]) -> Result<Vec<u8>, AuthError> {
        Err(AuthError::crypto(MslError::EncryptNotSupported).with_detail(self.id.clone()))
    }

    fn decrypt(&self, _data: &[u8]) -> Result<Vec<u8>, AuthError> {
        Err(AuthError::crypto(MslError::DecryptNotSupported).with_detail(self.id.clone()))
    }

    fn sign(&self, data: &[u8]) -> Result<String, AuthError> {
        let Some(key) = &self.signing_key else {
            return Err(AuthError::crypto(MslError::SignNotSupported).with_detail(self.id.clone()));
        };
        jsonwebtoken::crypto::sign(data, key, self.algorithm)
            .map_err(|e| AuthError::crypto(MslError::SignatureError).with_detail(e.to_string()))
    }

    fn verify(&self, data: &[u8], signature: &str) -> Result<bool, AuthError> {
        match jsonwebtoken::crypto::verify(signature, data, &self.verifying_key, self.algorithm) {
            Ok(valid) => Ok(valid),
            // Garbage from the peer is a failed verification, not an error.
            Err(e) if matches!(e.kind(), ErrorKind::Base64(_) | ErrorKind::InvalidSignature) => {
                Ok(false)
            }
            Err(e) => {
                Err(AuthError::crypto(MslError::SignatureError).with_detail(e.to_string()))
            }
        }
    }
}
