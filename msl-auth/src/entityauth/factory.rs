use std::sync::Arc;

use futures::future::BoxFuture;
use jsonwebtoken::Algorithm;
use tracing::warn;

use super::{EntityAuthenticationData, EntityAuthenticationScheme};
use crate::context::MslContext;
use crate::crypto::{CryptoContext, SignatureCryptoContext};
use crate::error::{AuthError, FactoryError, InternalError, MslError};
use crate::io::Document;
use crate::keys::KeyPairStore;
use crate::util::AuthenticationUtils;

/// Validates entity authentication data for one scheme and derives the crypto
/// context used to protect messages from that entity.
///
/// Futures returned by a factory do no work until polled and resolve exactly
/// once.
pub trait EntityAuthenticationFactory: Send + Sync {
    /// The scheme this factory handles.
    fn scheme(&self) -> EntityAuthenticationScheme;

    /// Parse the scheme-specific `authdata` object.
    ///
    /// # Errors
    /// Returns `Encoding(ParseError)` if a mandatory field is missing or
    /// wrongly typed, or a scheme-specific error if a field is invalid.
    fn create_data<'a>(
        &'a self,
        ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<EntityAuthenticationData, AuthError>>;

    /// Derive the crypto context for previously parsed data.
    ///
    /// # Errors
    /// Returns `FactoryError::Rejected` if the entity or its keys are not
    /// accepted, and `FactoryError::Internal` if `data` belongs to another
    /// scheme.
    fn get_crypto_context<'a>(
        &'a self,
        ctx: &'a MslContext,
        data: &'a EntityAuthenticationData,
    ) -> BoxFuture<'a, Result<Arc<dyn CryptoContext>, FactoryError>>;
}

/// Defect raised when a factory is handed data of another scheme.
pub fn wrong_data(
    expected: EntityAuthenticationScheme,
    data: &EntityAuthenticationData,
) -> FactoryError {
    FactoryError::Internal(InternalError::new(format!(
        "{expected} factory received {} authentication data",
        data.scheme()
    )))
}

/// Build a verify context from the public key stored under `key_id`, able to
/// sign when the private half is also known.
pub fn key_pair_context(
    store: &dyn KeyPairStore,
    key_id: &str,
    algorithm: Algorithm,
) -> Option<SignatureCryptoContext> {
    let public = store.public_key(key_id)?;
    Some(SignatureCryptoContext::new(key_id, algorithm, public, store.private_key(key_id)))
}

/// Reject revoked entities and entities not permitted to use `scheme`.
pub fn check_entity(
    utils: &dyn AuthenticationUtils,
    identity: &str,
    scheme: EntityAuthenticationScheme,
) -> Result<(), AuthError> {
    if utils.is_entity_revoked(identity) {
        warn!("rejected revoked entity {identity}");
        return Err(AuthError::entity(MslError::EntityRevoked)
            .with_detail(identity.to_string())
            .with_scheme(scheme.name()));
    }
    if !utils.is_scheme_permitted(identity, scheme) {
        warn!("entity {identity} is not permitted to use {scheme}");
        return Err(AuthError::entity(MslError::IncorrectEntityAuthData)
            .with_detail(identity.to_string())
            .with_scheme(scheme.name()));
    }
    Ok(())
}
