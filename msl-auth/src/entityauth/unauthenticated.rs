//! `NONE`: an entity that claims an identity without proving it.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::debug;

use super::factory::{check_entity, wrong_data};
use super::{EntityAuthenticationData, EntityAuthenticationFactory, EntityAuthenticationScheme};
use crate::context::MslContext;
use crate::crypto::{CryptoContext, NullCryptoContext};
use crate::error::{AuthError, FactoryError};
use crate::io::{Document, EncoderFactory};
use crate::util::AuthenticationUtils;

const KEY_IDENTITY: &str = "identity";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnauthenticatedAuthenticationData {
    identity: String,
}

impl UnauthenticatedAuthenticationData {
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

/// Accepts any claimed identity that is neither revoked nor barred from the
/// scheme, and hands out a [`NullCryptoContext`].
pub struct UnauthenticatedAuthenticationFactory {
    utils: Arc<dyn AuthenticationUtils>,
}

impl UnauthenticatedAuthenticationFactory {
    #[must_use]
    pub fn new(utils: Arc<dyn AuthenticationUtils>) -> Self {
        Self { utils }
    }
}

impl EntityAuthenticationFactory for UnauthenticatedAuthenticationFactory {
    fn scheme(&self) -> EntityAuthenticationScheme {
        EntityAuthenticationScheme::None
    }

    fn create_data<'a>(
        &'a self,
        _ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<EntityAuthenticationData, AuthError>> {
        Box::pin(async move {
            UnauthenticatedAuthenticationData::parse(authdata)
                .map(EntityAuthenticationData::Unauthenticated)
        })
    }

    fn get_crypto_context<'a>(
        &'a self,
        _ctx: &'a MslContext,
        data: &'a EntityAuthenticationData,
    ) -> BoxFuture<'a, Result<Arc<dyn CryptoContext>, FactoryError>> {
        Box::pin(async move {
            let EntityAuthenticationData::Unauthenticated(data) = data else {
                return Err(wrong_data(self.scheme(), data));
            };
            check_entity(self.utils.as_ref(), data.identity(), self.scheme())?;
            debug!("unauthenticated entity {} accepted", data.identity());
            Ok(Arc::new(NullCryptoContext) as Arc<dyn CryptoContext>)
        })
    }
}
