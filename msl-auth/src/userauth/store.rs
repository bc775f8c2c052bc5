//! Email/password credential lookup.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use sha2::{Digest, Sha256};

use super::MslUser;
use crate::keys::KeyStoreError;

/// Resolves email/password credentials to a user.
pub trait EmailPasswordStore: Send + Sync {
    /// The user identified by `email` and `password`, if the pair is valid.
    fn is_user(&self, email: &str, password: &str) -> Option<MslUser>;
}

#[derive(Clone)]
struct Credential {
    digest: [u8; 32],
    user_id: String,
}

/// In-memory store keeping only salted SHA-256 digests of passwords.
#[derive(Default)]
pub struct StaticEmailPasswordStore {
    users: RwLock<HashMap<String, Credential>>,
}

impl StaticEmailPasswordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the credentials for `email`.
    ///
    /// # Errors
    /// Returns `KeyStoreError::EmptyKeyId` for an empty email or user id and
    /// `KeyStoreError::EmptySecret` for an empty password.
    pub fn add_user(
        &self,
        email: &str,
        password: &str,
        user_id: &str,
    ) -> Result<(), KeyStoreError> {
        if email.is_empty() || user_id.is_empty() {
            return Err(KeyStoreError::EmptyKeyId);
        }
        if password.is_empty() {
            return Err(KeyStoreError::EmptySecret);
        }
        let credential = Credential {
            digest: digest(email, password),
            user_id: user_id.to_string(),
        };
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(email.to_string(), credential);
        Ok(())
    }

    pub fn remove_user(&self, email: &str) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(email);
    }
}

impl EmailPasswordStore for StaticEmailPasswordStore {
    fn is_user(&self, email: &str, password: &str) -> Option<MslUser> {
        let credential = self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .cloned()?;
        (credential.digest == digest(email, password)).then(|| MslUser::new(credential.user_id))
    }
}

impl std::fmt::Debug for StaticEmailPasswordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut emails: Vec<String> = self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        emails.sort();
        f.debug_struct("StaticEmailPasswordStore")
            .field("users", &emails)
            .finish()
    }
}

// Salted with the email so equal passwords do not share a digest.
fn digest(email: &str, password: &str) -> [u8; 32] {
    let hash = Sha256::new()
        .chain_update(email.as_bytes())
        .chain_update([0u8])
        .chain_update(password.as_bytes())
        .finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    out
}
