//! Entity revocation and scheme permission policy.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use crate::entityauth::EntityAuthenticationScheme;
use crate::userauth::UserAuthenticationScheme;

/// Policy consulted by factories before handing out a crypto context or
/// authenticating a user.
pub trait AuthenticationUtils: Send + Sync {
    /// Whether the entity identity has been revoked.
    fn is_entity_revoked(&self, identity: &str) -> bool;

    /// Whether the entity may authenticate with `scheme`.
    fn is_scheme_permitted(&self, identity: &str, scheme: EntityAuthenticationScheme) -> bool;

    /// Whether the entity may present user authentication with `scheme`.
    fn is_user_scheme_permitted(&self, identity: &str, scheme: UserAuthenticationScheme) -> bool;
}

/// In-memory policy: everything is permitted unless revoked or forbidden.
#[derive(Debug, Default)]
pub struct StaticAuthenticationUtils {
    revoked: RwLock<HashSet<String>>,
    forbidden: RwLock<HashSet<(String, EntityAuthenticationScheme)>>,
    forbidden_user: RwLock<HashSet<(String, UserAuthenticationScheme)>>,
}

impl StaticAuthenticationUtils {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy with `identities` already revoked.
    #[must_use]
    pub fn with_revoked<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            revoked: RwLock::new(identities.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn revoke_entity(&self, identity: &str) {
        self.revoked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identity.to_string());
    }

    pub fn restore_entity(&self, identity: &str) {
        self.revoked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(identity);
    }

    pub fn forbid_scheme(&self, identity: &str, scheme: EntityAuthenticationScheme) {
        self.forbidden
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((identity.to_string(), scheme));
    }

    pub fn forbid_user_scheme(&self, identity: &str, scheme: UserAuthenticationScheme) {
        self.forbidden_user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((identity.to_string(), scheme));
    }
}

impl AuthenticationUtils for StaticAuthenticationUtils {
    fn is_entity_revoked(&self, identity: &str) -> bool {
        self.revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(identity)
    }

    fn is_scheme_permitted(&self, identity: &str, scheme: EntityAuthenticationScheme) -> bool {
        !self
            .forbidden
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(identity.to_string(), scheme))
    }

    fn is_user_scheme_permitted(&self, identity: &str, scheme: UserAuthenticationScheme) -> bool {
        !self
            .forbidden_user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(identity.to_string(), scheme))
    }
}
