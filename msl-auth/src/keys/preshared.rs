use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use super::KeyStoreError;

/// Symmetric keys shared in advance with one entity.
#[derive(Clone, PartialEq, Eq)]
pub struct PresharedKeys {
    encryption: Vec<u8>,
    hmac: Vec<u8>,
}

impl PresharedKeys {
    /// # Errors
    /// Returns `KeyStoreError::EmptySecret` if either key is empty.
    pub fn new(encryption: Vec<u8>, hmac: Vec<u8>) -> Result<Self, KeyStoreError> {
        if encryption.is_empty() || hmac.is_empty() {
            return Err(KeyStoreError::EmptySecret);
        }
        Ok(Self { encryption, hmac })
    }

    #[must_use]
    pub fn encryption_key(&self) -> &[u8] {
        &self.encryption
    }

    #[must_use]
    pub fn hmac_key(&self) -> &[u8] {
        &self.hmac
    }
}

impl fmt::Debug for PresharedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresharedKeys").finish_non_exhaustive()
    }
}

/// Lookup of pre-shared keys by entity identity.
pub trait PresharedKeyStore: Send + Sync {
    fn keys(&self, identity: &str) -> Option<PresharedKeys>;
}

/// In-memory `PresharedKeyStore`.
#[derive(Default)]
pub struct StaticPresharedKeyStore {
    keys: RwLock<HashMap<String, PresharedKeys>>,
}

impl StaticPresharedKeyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register keys for `identity`, replacing any existing keys.
    ///
    /// # Errors
    /// Returns `KeyStoreError::EmptyKeyId` if `identity` is empty.
    pub fn add(&self, identity: &str, keys: PresharedKeys) -> Result<(), KeyStoreError> {
        if identity.is_empty() {
            return Err(KeyStoreError::EmptyKeyId);
        }
        self.keys
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identity.to_string(), keys);
        Ok(())
    }

    pub fn remove(&self, identity: &str) {
        self.keys
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(identity);
    }
}

impl PresharedKeyStore for StaticPresharedKeyStore {
    fn keys(&self, identity: &str) -> Option<PresharedKeys> {
        self.keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identity)
            .cloned()
    }
}
