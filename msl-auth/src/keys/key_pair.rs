//! Public/private key pairs indexed by key identifier.
//!
//! Used by the RSA and ECC factories: the peer names a key identifier in its
//! authentication data and the factory resolves it here.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use jsonwebtoken::{DecodingKey, EncodingKey};

use super::KeyStoreError;

/// Asymmetric key family stored under a key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Rsa,
    Ec,
}

/// Lookup of asymmetric keys by key identifier.
pub trait KeyPairStore: Send + Sync {
    /// The verification key for `key_id`, if known.
    fn public_key(&self, key_id: &str) -> Option<DecodingKey>;

    /// The signing key for `key_id`, if known.
    fn private_key(&self, key_id: &str) -> Option<EncodingKey>;
}

#[derive(Clone)]
struct Entry {
    public: Option<DecodingKey>,
    private: Option<EncodingKey>,
}

/// In-memory `KeyPairStore` populated from PEM text.
///
/// # Thread Safety
///
/// Reads take a shared lock; additions take an exclusive lock.
pub struct StaticKeyPairStore {
    key_type: KeyType,
    entries: RwLock<HashMap<String, Entry>>,
}

impl StaticKeyPairStore {
    /// Create an empty store for keys of `key_type`.
    #[must_use]
    pub fn new(key_type: KeyType) -> Self {
        Self {
            key_type,
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Add a PEM-encoded public key (`-----BEGIN PUBLIC KEY-----`).
    ///
    /// # Errors
    /// Returns `KeyStoreError::EmptyKeyId` if `key_id` is empty, or
    /// `KeyStoreError::InvalidPem` if the key does not parse as this store's
    /// key type.
    pub fn add_public_pem(&self, key_id: &str, pem: &str) -> Result<(), KeyStoreError> {
        if key_id.is_empty() {
            return Err(KeyStoreError::EmptyKeyId);
        }
        let key = match self.key_type {
            KeyType::Rsa => DecodingKey::from_rsa_pem(pem.as_bytes()),
            KeyType::Ec => DecodingKey::from_ec_pem(pem.as_bytes()),
        }
        .map_err(|e| KeyStoreError::InvalidPem(e.to_string()))?;

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key_id.to_string())
            .or_insert(Entry {
                public: None,
                private: None,
            })
            .public = Some(key);
        Ok(())
    }

    /// Add a PEM-encoded PKCS#8 private key.
    ///
    /// # Errors
    /// Returns `KeyStoreError::EmptyKeyId` if `key_id` is empty, or
    /// `KeyStoreError::InvalidPem` if the key does not parse.
    pub fn add_private_pem(&self, key_id: &str, pem: &str) -> Result<(), KeyStoreError> {
        if key_id.is_empty() {
            return Err(KeyStoreError::EmptyKeyId);
        }
        let key = match self.key_type {
            KeyType::Rsa => EncodingKey::from_rsa_pem(pem.as_bytes()),
            KeyType::Ec => EncodingKey::from_ec_pem(pem.as_bytes()),
        }
        .map_err(|e| KeyStoreError::InvalidPem(e.to_string()))?;

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key_id.to_string())
            .or_insert(Entry {
                public: None,
                private: None,
            })
            .private = Some(key);
        Ok(())
    }

    /// Remove both halves of the pair stored under `key_id`.
    pub fn remove(&self, key_id: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key_id);
    }

    fn entry(&self, key_id: &str) -> Option<Entry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key_id)
            .cloned()
    }
}

impl KeyPairStore for StaticKeyPairStore {
    fn public_key(&self, key_id: &str) -> Option<DecodingKey> {
        self.entry(key_id).and_then(|e| e.public)
    }

    fn private_key(&self, key_id: &str) -> Option<EncodingKey> {
        self.entry(key_id).and_then(|e| e.private)
    }
}

impl std::fmt::Debug for StaticKeyPairStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        f.debug_struct("StaticKeyPairStore")
            .field("key_type", &self.key_type)
            .field("key_ids", &ids)
            .finish()
    }
}
