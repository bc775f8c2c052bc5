//! Crypto contexts derived from authentication data.
//!
//! This subsystem only constructs contexts; message protection happens
//! downstream.

mod null;
mod signature;

pub use null::NullCryptoContext;
pub use signature::SignatureCryptoContext;

use std::fmt;

use crate::error::AuthError;

/// Capability used to protect protocol messages for one authenticated entity.
///
/// Signatures are base64url text, matching the encoding produced by
/// `jsonwebtoken::crypto`.
pub trait CryptoContext: Send + Sync + fmt::Debug {
    /// Encrypt `data`.
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, AuthError>;

    /// Decrypt `data`.
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, AuthError>;

    /// Compute a signature over `data`.
    fn sign(&self, data: &[u8]) -> Result<String, AuthError>;

    /// Check `signature` over `data`. A well-formed but wrong signature is
    /// `Ok(false)`.
    fn verify(&self, data: &[u8], signature: &str) -> Result<bool, AuthError>;
}
