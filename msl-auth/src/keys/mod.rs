//! Key material lookup for authentication factories.
//!
//! # Pre-conditions
//! - Keys are registered before the factories that read them are used.
//!
//! # Invariants
//! - Stores only hold key material that parsed successfully when added.
//! - `Debug` output of stores and key sets never contains key bytes.

mod key_pair;
mod preshared;
mod x509_store;

pub use key_pair::{KeyPairStore, KeyType, StaticKeyPairStore};
pub use preshared::{PresharedKeyStore, PresharedKeys, StaticPresharedKeyStore};
pub use x509_store::X509Store;

/// Error returned when key material cannot be added to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStoreError {
    /// The key identifier or identity is empty.
    EmptyKeyId,
    /// A shared secret is empty.
    EmptySecret,
    /// The PEM text is not a valid key of the expected type.
    InvalidPem(String),
    /// The certificate could not be parsed.
    InvalidCertificate(String),
}

impl std::fmt::Display for KeyStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKeyId => write!(f, "key identifier must not be empty"),
            Self::EmptySecret => write!(f, "shared secret must not be empty"),
            Self::InvalidPem(reason) => write!(f, "invalid PEM key: {reason}"),
            Self::InvalidCertificate(reason) => write!(f, "invalid certificate: {reason}"),
        }
    }
}

impl std::error::Error for KeyStoreError {}
