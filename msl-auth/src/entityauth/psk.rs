//! `PSK`: an entity holding keys shared in advance with the receiver.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use super::factory::{check_entity, wrong_data};
use super::{EntityAuthenticationData, EntityAuthenticationFactory, EntityAuthenticationScheme};
use crate::context::MslContext;
use crate::crypto::{CryptoContext, SignatureCryptoContext};
use crate::error::{AuthError, FactoryError, MslError};
use crate::io::{Document, EncoderFactory};
use crate::keys::PresharedKeyStore;
use crate::util::AuthenticationUtils;

const KEY_IDENTITY: &str = "identity";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresharedAuthenticationData {
    identity: String,
}

impl PresharedAuthenticationData {
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    #[must_use]
    pub fn auth_data(&self, encoder: &EncoderFactory) -> Document {
        let mut authdata = encoder.create_object();
        authdata.put_string(KEY_IDENTITY, self.identity.as_str());
        authdata
    }

    /// # Errors
    /// Returns `Encoding(ParseError)` if `identity` is missing or not a string.
    pub fn parse(authdata: &Document) -> Result<Self, AuthError> {
        Ok(Self::new(authdata.get_string(KEY_IDENTITY)?))
    }
}

/// Looks up the entity's pre-shared keys and returns an HMAC-SHA256 context
/// over the integrity key.
pub struct PresharedAuthenticationFactory {
    store: Arc<dyn PresharedKeyStore>,
    utils: Arc<dyn AuthenticationUtils>,
}

impl PresharedAuthenticationFactory {
    #[must_use]
    pub fn new(store: Arc<dyn PresharedKeyStore>, utils: Arc<dyn AuthenticationUtils>) -> Self {
        Self { store, utils }
    }
}

impl EntityAuthenticationFactory for PresharedAuthenticationFactory {
    fn scheme(&self) -> EntityAuthenticationScheme {
        EntityAuthenticationScheme::Psk
    }

    fn create_data<'a>(
        &'a self,
        _ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<EntityAuthenticationData, AuthError>> {
        Box::pin(async move {
            PresharedAuthenticationData::parse(authdata).map(EntityAuthenticationData::Psk)
        })
    }

    fn get_crypto_context<'a>(
        &'a self,
        _ctx: &'a MslContext,
        data: &'a EntityAuthenticationData,
    ) -> BoxFuture<'a, Result<Arc<dyn CryptoContext>, FactoryError>> {
        Box::pin(async move {
            let EntityAuthenticationData::Psk(data) = data else {
                return Err(wrong_data(self.scheme(), data));
            };
            let identity = data.identity();
            check_entity(self.utils.as_ref(), identity, self.scheme())?;

            let Some(keys) = self.store.keys(identity) else {
                warn!("no pre-shared keys for entity {identity}");
                return Err(AuthError::entity(MslError::EntityNotFound)
                    .with_detail(identity.to_string())
                    .with_scheme(self.scheme().name())
                    .into());
            };
            debug!("derived pre-shared key context for {identity}");
            Ok(Arc::new(SignatureCryptoContext::hmac_sha256(identity, keys.hmac_key()))
                as Arc<dyn CryptoContext>)
        })
    }
}
