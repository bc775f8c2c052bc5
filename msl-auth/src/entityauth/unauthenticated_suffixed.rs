//! `NONE_SUFFIXED`: an unauthenticated entity named by a root and a suffix.

use std::sync::Arc;

use futures::future::BoxFuture;

use super::factory::wrong_data;
use super::{EntityAuthenticationData, EntityAuthenticationFactory, EntityAuthenticationScheme};
use crate::context::MslContext;
use crate::crypto::{CryptoContext, NullCryptoContext};
use crate::error::{AuthError, FactoryError};
use crate::io::{Document, EncoderFactory};

const KEY_ROOT: &str = "root";
const KEY_SUFFIX: &str = "suffix";
const SEPARATOR: char = '.';

/// The identity is `root.suffix`, computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnauthenticatedSuffixedAuthenticationData {
    root: String,
    suffix: String,
    identity: String,
}

impl UnauthenticatedSuffixedAuthenticationData {
    #[must_use]
    pub fn new(root: impl Into<String>, suffix: impl Into<String>) -> Self {
        let root = root.into();
        let suffix = suffix.into();
        let identity = format!("{root}{SEPARATOR}{suffix}");
        Self {
            root,
            suffix,
            identity,
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    #[must_use]
    pub fn auth_data(&self, encoder: &EncoderFactory) -> Document {
        let mut authdata = encoder.create_object();
        authdata.put_string(KEY_ROOT, self.root.as_str());
        authdata.put_string(KEY_SUFFIX, self.suffix.as_str());
        authdata
    }

    /// # Errors
    /// Returns `Encoding(ParseError)` if `root` or `suffix` is missing or not
    /// a string.
    pub fn parse(authdata: &Document) -> Result<Self, AuthError> {
        let root = authdata.get_string(KEY_ROOT)?;
        let suffix = authdata.get_string(KEY_SUFFIX)?;
        Ok(Self::new(root, suffix))
    }
}

/// Performs no entity checks; every suffixed entity gets a
/// [`NullCryptoContext`].
#[derive(Debug, Default)]
pub struct UnauthenticatedSuffixedAuthenticationFactory;

impl UnauthenticatedSuffixedAuthenticationFactory {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EntityAuthenticationFactory for UnauthenticatedSuffixedAuthenticationFactory {
    fn scheme(&self) -> EntityAuthenticationScheme {
        EntityAuthenticationScheme::NoneSuffixed
    }

    fn create_data<'a>(
        &'a self,
        _ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<EntityAuthenticationData, AuthError>> {
        Box::pin(async move {
            UnauthenticatedSuffixedAuthenticationData::parse(authdata)
                .map(EntityAuthenticationData::UnauthenticatedSuffixed)
        })
    }

    fn get_crypto_context<'a>(
        &'a self,
        _ctx: &'a MslContext,
        data: &'a EntityAuthenticationData,
    ) -> BoxFuture<'a, Result<Arc<dyn CryptoContext>, FactoryError>> {
        Box::pin(async move {
            match data {
                EntityAuthenticationData::UnauthenticatedSuffixed(_) => {
                    Ok(Arc::new(NullCryptoContext) as Arc<dyn CryptoContext>)
                }
                other => Err(wrong_data(self.scheme(), other)),
            }
        })
    }
}
