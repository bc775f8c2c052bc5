use super::CryptoContext;
use crate::error::AuthError;

/// A crypto context that performs no protection.
///
/// Only handed out for schemes the protocol explicitly permits to be
/// unauthenticated. Encryption is the identity function, signatures are
/// empty and every signature verifies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullCryptoContext;

impl CryptoContext for NullCryptoContext {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, AuthError> {
        Ok(data.to_vec())
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, AuthError> {
        Ok(data.to_vec())
    }

    fn sign(&self, _data: &[u8]) -> Result<String, AuthError> {
        Ok(String::new())
    }

    fn verify(&self, _data: &[u8], _signature: &str) -> Result<bool, AuthError> {
        Ok(true)
    }
}
