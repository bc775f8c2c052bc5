//! `RSA`: an entity proving its identity with an RSA key pair.

use std::sync::Arc;

use futures::future::BoxFuture;
use jsonwebtoken::Algorithm;
use tracing::{debug, warn};

use super::factory::{check_entity, key_pair_context, wrong_data};
use super::{EntityAuthenticationData, EntityAuthenticationFactory, EntityAuthenticationScheme};
use crate::context::MslContext;
use crate::crypto::CryptoContext;
use crate::error::{AuthError, FactoryError, MslError};
use crate::io::{Document, EncoderFactory};
use crate::keys::KeyPairStore;
use crate::util::AuthenticationUtils;

const KEY_IDENTITY: &str = "identity";
const KEY_PUBKEY_ID: &str = "pubkeyid";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RsaAuthenticationData {
    identity: String,
    pubkey_id: String,
}

impl RsaAuthenticationData {
    #[must_use]
    pub fn new(identity: impl Into<String>, pubkey_id: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            pubkey_id: pubkey_id.into(),
        }
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Identifier of the public key the entity signs with.
    #[must_use]
    pub fn pubkey_id(&self) -> &str {
        &self.pubkey_id
    }

    #[must_use]
    pub fn auth_data(&self, encoder: &EncoderFactory) -> Document {
        let mut authdata = encoder.create_object();
        authdata.put_string(KEY_IDENTITY, self.identity.as_str());
        authdata.put_string(KEY_PUBKEY_ID, self.pubkey_id.as_str());
        authdata
    }

    /// # Errors
    /// Returns `Encoding(ParseError)` if `identity` or `pubkeyid` is missing
    /// or not a string.
    pub fn parse(authdata: &Document) -> Result<Self, AuthError> {
        let identity = authdata.get_string(KEY_IDENTITY)?;
        let pubkey_id = authdata.get_string(KEY_PUBKEY_ID)?;
        Ok(Self::new(identity, pubkey_id))
    }
}

pub struct RsaAuthenticationFactory {
    store: Arc<dyn KeyPairStore>,
    utils: Arc<dyn AuthenticationUtils>,
}

impl RsaAuthenticationFactory {
    #[must_use]
    pub fn new(store: Arc<dyn KeyPairStore>, utils: Arc<dyn AuthenticationUtils>) -> Self {
        Self { store, utils }
    }
}

impl EntityAuthenticationFactory for RsaAuthenticationFactory {
    fn scheme(&self) -> EntityAuthenticationScheme {
        EntityAuthenticationScheme::Rsa
    }

    fn create_data<'a>(
        &'a self,
        _ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<EntityAuthenticationData, AuthError>> {
        Box::pin(async move {
            let data = RsaAuthenticationData::parse(authdata)?;
            Ok(EntityAuthenticationData::Rsa(data))
        })
    }

    fn get_crypto_context<'a>(
        &'a self,
        _ctx: &'a MslContext,
        data: &'a EntityAuthenticationData,
    ) -> BoxFuture<'a, Result<Arc<dyn CryptoContext>, FactoryError>> {
        Box::pin(async move {
            let EntityAuthenticationData::Rsa(data) = data else {
                return Err(wrong_data(self.scheme(), data));
            };
            check_entity(self.utils.as_ref(), data.identity(), self.scheme())?;

            let store = self.store.as_ref();
            let Some(crypto) = key_pair_context(store, data.pubkey_id(), Algorithm::RS256) else {
                warn!("RSA public key {} not found", data.pubkey_id());
                return Err(AuthError::entity(MslError::RsaPublicKeyNotFound)
                    .with_detail(data.pubkey_id().to_string())
                    .with_scheme(self.scheme().name())
                    .into());
            };
            debug!(
                "derived RSA context for {} with key {}",
                data.identity(),
                data.pubkey_id()
            );
            Ok(Arc::new(crypto) as Arc<dyn CryptoContext>)
        })
    }
}
