//! Session context owning the encoder and the scheme registries.
//!
//! # Pre-conditions
//! - Factories are registered before parsing starts; registration after
//!   that point is allowed and takes effect for subsequent lookups.
//!
//! # Invariants
//! - Each entity and user scheme maps to at most one factory.
//! - The encoder is fixed for the lifetime of the context.

use std::sync::Arc;

use tracing::info;

use crate::entityauth::{EntityAuthenticationFactory, EntityAuthenticationScheme};
use crate::io::{EncoderFactory, EncoderFormat};
use crate::registry::FactoryRegistry;
use crate::userauth::{UserAuthenticationFactory, UserAuthenticationScheme};

type EntityRegistry = FactoryRegistry<EntityAuthenticationScheme, dyn EntityAuthenticationFactory>;
type UserRegistry = FactoryRegistry<UserAuthenticationScheme, dyn UserAuthenticationFactory>;

/// Everything a parse or crypto-context derivation needs from its caller.
pub struct MslContext {
    encoder: EncoderFactory,
    entity_factories: EntityRegistry,
    user_factories: UserRegistry,
}

impl MslContext {
    /// Create a context with the given encoder and no factories.
    #[must_use]
    pub fn new(encoder: EncoderFactory) -> Self {
        Self {
            encoder,
            entity_factories: FactoryRegistry::new(),
            user_factories: FactoryRegistry::new(),
        }
    }

    #[must_use]
    pub fn builder() -> MslContextBuilder {
        MslContextBuilder::default()
    }

    #[must_use]
    pub const fn encoder(&self) -> &EncoderFactory {
        &self.encoder
    }

    /// Look up the factory for an entity scheme.
    #[must_use]
    pub fn entity_authentication_factory(
        &self,
        scheme: EntityAuthenticationScheme,
    ) -> Option<Arc<dyn EntityAuthenticationFactory>> {
        self.entity_factories.get(scheme)
    }

    /// Register a factory under its own scheme, replacing any previous one.
    pub fn add_entity_authentication_factory(&self, factory: Arc<dyn EntityAuthenticationFactory>) {
        let scheme = factory.scheme();
        if self.entity_factories.register(scheme, factory).is_some() {
            info!("replaced entity authentication factory for {scheme}");
        } else {
            info!("registered entity authentication factory for {scheme}");
        }
    }

    /// Remove the factory for an entity scheme. The scheme stays recognized.
    pub fn remove_entity_authentication_factory(&self, scheme: EntityAuthenticationScheme) {
        if self.entity_factories.remove(scheme).is_some() {
            info!("removed entity authentication factory for {scheme}");
        }
    }

    /// Registered entity schemes, sorted.
    #[must_use]
    pub fn entity_authentication_schemes(&self) -> Vec<EntityAuthenticationScheme> {
        self.entity_factories.schemes()
    }

    /// Look up the factory for a user scheme.
    #[must_use]
    pub fn user_authentication_factory(
        &self,
        scheme: UserAuthenticationScheme,
    ) -> Option<Arc<dyn UserAuthenticationFactory>> {
        self.user_factories.get(scheme)
    }

    pub fn add_user_authentication_factory(&self, factory: Arc<dyn UserAuthenticationFactory>) {
        let scheme = factory.scheme();
        if self.user_factories.register(scheme, factory).is_some() {
            info!("replaced user authentication factory for {scheme}");
        } else {
            info!("registered user authentication factory for {scheme}");
        }
    }

    pub fn remove_user_authentication_factory(&self, scheme: UserAuthenticationScheme) {
        if self.user_factories.remove(scheme).is_some() {
            info!("removed user authentication factory for {scheme}");
        }
    }

    #[must_use]
    pub fn user_authentication_schemes(&self) -> Vec<UserAuthenticationScheme> {
        self.user_factories.schemes()
    }
}

impl std::fmt::Debug for MslContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MslContext")
            .field("encoder", &self.encoder)
            .field("entity_schemes", &self.entity_factories.schemes())
            .field("user_schemes", &self.user_factories.schemes())
            .finish()
    }
}

/// Builder for [`MslContext`].
#[derive(Default)]
pub struct MslContextBuilder {
    format: EncoderFormat,
    entity_factories: Vec<Arc<dyn EntityAuthenticationFactory>>,
    user_factories: Vec<Arc<dyn UserAuthenticationFactory>>,
}

impl MslContextBuilder {
    #[must_use]
    pub const fn encoder_format(mut self, format: EncoderFormat) -> Self {
        self.format = format;
        self
    }

    /// Add an entity factory. A later factory for the same scheme wins.
    #[must_use]
    pub fn entity_factory(mut self, factory: Arc<dyn EntityAuthenticationFactory>) -> Self {
        self.entity_factories.push(factory);
        self
    }

    /// Add a user factory. A later factory for the same scheme wins.
    #[must_use]
    pub fn user_factory(mut self, factory: Arc<dyn UserAuthenticationFactory>) -> Self {
        self.user_factories.push(factory);
        self
    }

    #[must_use]
    pub fn build(self) -> MslContext {
        let ctx = MslContext::new(EncoderFactory::new(self.format));
        for factory in self.entity_factories {
            ctx.add_entity_authentication_factory(factory);
        }
        for factory in self.user_factories {
            ctx.add_user_authentication_factory(factory);
        }
        ctx
    }
}
