#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code to prevent panics from corrupt data.
// Test code is allowed to use unwrap() for convenience.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::io::Read;
use std::sync::Arc;

use msl_auth::config::AuthConfig;
use msl_auth::entityauth::{
    EccAuthenticationFactory, EntityAuthenticationData, PresharedAuthenticationFactory,
    RsaAuthenticationFactory, UnauthenticatedAuthenticationFactory,
    UnauthenticatedSuffixedAuthenticationFactory, X509AuthenticationFactory,
};
use msl_auth::keys::{KeyType, StaticKeyPairStore, StaticPresharedKeyStore};
use msl_auth::userauth::{
    EmailPasswordAuthenticationFactory, StaticEmailPasswordStore, UserAuthenticationData,
};
use msl_auth::util::AuthenticationUtils;
use msl_auth::{AuthError, MslContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What the document on stdin holds.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Entity,
    User,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msl_auth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let kind = match std::env::args().nth(1).as_deref() {
        None | Some("entity") => Kind::Entity,
        Some("user") => Kind::User,
        Some(other) => {
            tracing::error!("unknown record kind '{other}', expected 'entity' or 'user'");
            std::process::exit(2);
        }
    };

    // Load configuration from environment variables
    let config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: encoder_format={}, revoked_entities={}, trust_anchors={}",
        config.encoder_format.name(),
        config.revoked_entities.len(),
        config.trust_anchors.len()
    );

    let ctx = build_context(&config);

    let mut input = Vec::new();
    if let Err(e) = std::io::stdin().read_to_end(&mut input) {
        tracing::error!("Failed to read stdin: {e}");
        std::process::exit(1);
    }

    match parse(&ctx, kind, &input).await {
        Ok(identity) => println!("{identity}"),
        Err(e) => {
            tracing::error!("rejected ({:?}): {e}", e.classification());
            std::process::exit(1);
        }
    }
}

/// Register every scheme, backed by the configured trust anchors and
/// revocation list. Key and credential stores start empty.
#[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected for shared state
fn build_context(config: &AuthConfig) -> MslContext {
    let utils: Arc<dyn AuthenticationUtils> = Arc::new(config.authentication_utils());
    let ctx = MslContext::builder()
        .encoder_format(config.encoder_format)
        .entity_factory(Arc::new(UnauthenticatedAuthenticationFactory::new(Arc::clone(&utils))))
        .entity_factory(Arc::new(UnauthenticatedSuffixedAuthenticationFactory::new()))
        .entity_factory(Arc::new(PresharedAuthenticationFactory::new(
            Arc::new(StaticPresharedKeyStore::new()),
            Arc::clone(&utils),
        )))
        .entity_factory(Arc::new(RsaAuthenticationFactory::new(
            Arc::new(StaticKeyPairStore::new(KeyType::Rsa)),
            Arc::clone(&utils),
        )))
        .entity_factory(Arc::new(EccAuthenticationFactory::new(
            Arc::new(StaticKeyPairStore::new(KeyType::Ec)),
            Arc::clone(&utils),
        )))
        .entity_factory(Arc::new(X509AuthenticationFactory::new(
            Arc::clone(&config.trust_anchors),
            Arc::clone(&utils),
        )))
        .user_factory(Arc::new(EmailPasswordAuthenticationFactory::new(
            Arc::new(StaticEmailPasswordStore::new()),
            utils,
        )))
        .build();
    config.apply(&ctx);
    ctx
}

async fn parse(ctx: &MslContext, kind: Kind, input: &[u8]) -> Result<String, AuthError> {
    let document = ctx.encoder().parse_object(input)?;
    match kind {
        Kind::Entity => {
            let data = EntityAuthenticationData::parse(ctx, &document).await?;
            tracing::info!("parsed {} entity {}", data.scheme(), data.identity());
            Ok(data.identity().to_string())
        }
        Kind::User => {
            let data = UserAuthenticationData::parse(ctx, &document).await?;
            tracing::info!("parsed {} user {}", data.scheme(), data.identity());
            Ok(data.identity().to_string())
        }
    }
}
