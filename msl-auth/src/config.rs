//! Authentication configuration module.
//!
//! This module loads the configuration of the authentication subsystem from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `MSL_ENCODER_FORMAT`: Default encoder format (default: `JSON`)
//! - `MSL_REVOKED_ENTITIES`: Comma-separated revoked entity identities (default: none)
//! - `MSL_DISABLED_ENTITY_SCHEMES`: Comma-separated entity schemes to leave unregistered
//!   (default: none)
//! - `MSL_X509_TRUST_ANCHORS`: Path to a PEM bundle of trusted certificates (default: none)
//!
//! # Invariants
//!
//! - `revoked_entities` contains no empty identities
//! - `disabled_entity_schemes` only names recognized schemes
//! - `trust_anchors` holds only certificates that parsed when loaded

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::context::MslContext;
use crate::entityauth::EntityAuthenticationScheme;
use crate::io::EncoderFormat;
use crate::keys::X509Store;
use crate::util::StaticAuthenticationUtils;

const ENV_ENCODER_FORMAT: &str = "MSL_ENCODER_FORMAT";
const ENV_REVOKED_ENTITIES: &str = "MSL_REVOKED_ENTITIES";
const ENV_DISABLED_ENTITY_SCHEMES: &str = "MSL_DISABLED_ENTITY_SCHEMES";
const ENV_X509_TRUST_ANCHORS: &str = "MSL_X509_TRUST_ANCHORS";

/// Authentication configuration.
///
/// # Post-conditions
///
/// When constructed via `from_env()`, every listed scheme name was
/// recognized and the trust anchor bundle, if any, was read and parsed.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Default format for encoded documents.
    pub encoder_format: EncoderFormat,
    /// Entity identities that are rejected regardless of scheme.
    pub revoked_entities: Vec<String>,
    /// Entity schemes whose factories are not registered.
    pub disabled_entity_schemes: Vec<EntityAuthenticationScheme>,
    /// Path the trust anchors were loaded from.
    pub trust_anchor_path: Option<PathBuf>,
    /// Trusted certificates for the X.509 scheme.
    pub trust_anchors: Arc<X509Store>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            encoder_format: EncoderFormat::default(),
            revoked_entities: Vec::new(),
            disabled_entity_schemes: Vec::new(),
            trust_anchor_path: None,
            trust_anchors: Arc::new(X509Store::new()),
        }
    }
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `MSL_ENCODER_FORMAT` names an unsupported format
    /// - `MSL_DISABLED_ENTITY_SCHEMES` names an unknown scheme
    /// - `MSL_X509_TRUST_ANCHORS` cannot be read or contains an invalid certificate
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`AuthConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let encoder_format = Self::load_encoder_format(lookup(ENV_ENCODER_FORMAT))?;
        let revoked_entities = split_list(lookup(ENV_REVOKED_ENTITIES).as_deref());
        let disabled_entity_schemes =
            Self::load_disabled_schemes(lookup(ENV_DISABLED_ENTITY_SCHEMES).as_deref())?;
        let trust_anchor_path = lookup(ENV_X509_TRUST_ANCHORS)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let trust_anchors = Self::load_trust_anchors(trust_anchor_path.as_deref())?;

        Ok(Self {
            encoder_format,
            revoked_entities,
            disabled_entity_schemes,
            trust_anchor_path,
            trust_anchors: Arc::new(trust_anchors),
        })
    }

    /// Revocation policy holding the configured revoked entities.
    #[must_use]
    pub fn authentication_utils(&self) -> StaticAuthenticationUtils {
        StaticAuthenticationUtils::with_revoked(self.revoked_entities.iter().map(String::as_str))
    }

    /// Remove the factories of disabled schemes from `ctx`.
    pub fn apply(&self, ctx: &MslContext) {
        for scheme in &self.disabled_entity_schemes {
            ctx.remove_entity_authentication_factory(*scheme);
            info!("entity authentication scheme {scheme} disabled by configuration");
        }
    }

    fn load_encoder_format(value: Option<String>) -> Result<EncoderFormat, ConfigError> {
        value.map_or_else(
            || Ok(EncoderFormat::default()),
            |value| {
                EncoderFormat::from_name(value.trim()).ok_or_else(|| ConfigError::InvalidValue {
                    name: ENV_ENCODER_FORMAT.to_string(),
                    message: format!("'{value}' is not a supported encoder format"),
                })
            },
        )
    }

    fn load_disabled_schemes(
        value: Option<&str>,
    ) -> Result<Vec<EntityAuthenticationScheme>, ConfigError> {
        split_list(value)
            .into_iter()
            .map(|name| {
                EntityAuthenticationScheme::from_name(&name).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        name: ENV_DISABLED_ENTITY_SCHEMES.to_string(),
                        message: format!("'{name}' is not an entity authentication scheme"),
                    }
                })
            })
            .collect()
    }

    fn load_trust_anchors(path: Option<&Path>) -> Result<X509Store, ConfigError> {
        let store = X509Store::new();
        let Some(path) = path else {
            return Ok(store);
        };
        let invalid = |message: String| ConfigError::InvalidValue {
            name: ENV_X509_TRUST_ANCHORS.to_string(),
            message,
        };
        let pem = std::fs::read(path)
            .map_err(|e| invalid(format!("cannot read {}: {e}", path.display())))?;
        let added = store
            .add_trusted_pem(&pem)
            .map_err(|e| invalid(format!("{}: {e}", path.display())))?;
        if added == 0 {
            return Err(invalid(format!(
                "{} contains no certificates",
                path.display()
            )));
        }
        Ok(store)
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
