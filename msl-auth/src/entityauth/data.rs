use tracing::{debug, warn};

use super::{
    EccAuthenticationData, EntityAuthenticationScheme, PresharedAuthenticationData,
    RsaAuthenticationData, UnauthenticatedAuthenticationData,
    UnauthenticatedSuffixedAuthenticationData, X509AuthenticationData,
};
use crate::context::MslContext;
use crate::error::{AuthError, MslError};
use crate::io::{Document, EncoderFactory, EncoderFormat};

/// Envelope key holding the scheme name.
pub const KEY_SCHEME: &str = "scheme";
/// Envelope key holding the scheme-specific object.
pub const KEY_AUTHDATA: &str = "authdata";

/// Entity authentication data of any supported scheme.
///
/// Values are immutable. Two values are equal only if they have the same
/// scheme and equal scheme-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityAuthenticationData {
    Unauthenticated(UnauthenticatedAuthenticationData),
    UnauthenticatedSuffixed(UnauthenticatedSuffixedAuthenticationData),
    Psk(PresharedAuthenticationData),
    Rsa(RsaAuthenticationData),
    Ecc(EccAuthenticationData),
    X509(X509AuthenticationData),
}

impl EntityAuthenticationData {
    #[must_use]
    pub const fn scheme(&self) -> EntityAuthenticationScheme {
        match self {
            Self::Unauthenticated(_) => EntityAuthenticationScheme::None,
            Self::UnauthenticatedSuffixed(_) => EntityAuthenticationScheme::NoneSuffixed,
            Self::Psk(_) => EntityAuthenticationScheme::Psk,
            Self::Rsa(_) => EntityAuthenticationScheme::Rsa,
            Self::Ecc(_) => EntityAuthenticationScheme::Ecc,
            Self::X509(_) => EntityAuthenticationScheme::X509,
        }
    }

    /// The entity identity.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            Self::Unauthenticated(d) => d.identity(),
            Self::UnauthenticatedSuffixed(d) => d.identity(),
            Self::Psk(d) => d.identity(),
            Self::Rsa(d) => d.identity(),
            Self::Ecc(d) => d.identity(),
            Self::X509(d) => d.identity(),
        }
    }

    /// The scheme-specific object.
    #[must_use]
    pub fn auth_data(&self, encoder: &EncoderFactory) -> Document {
        match self {
            Self::Unauthenticated(d) => d.auth_data(encoder),
            Self::UnauthenticatedSuffixed(d) => d.auth_data(encoder),
            Self::Psk(d) => d.auth_data(encoder),
            Self::Rsa(d) => d.auth_data(encoder),
            Self::Ecc(d) => d.auth_data(encoder),
            Self::X509(d) => d.auth_data(encoder),
        }
    }

    /// The `{scheme, authdata}` envelope.
    #[must_use]
    pub fn to_document(&self, encoder: &EncoderFactory) -> Document {
        let mut document = encoder.create_object();
        document.put_string(KEY_SCHEME, self.scheme().name());
        document.put_document(KEY_AUTHDATA, self.auth_data(encoder));
        document
    }

    /// Canonical encoding of the envelope.
    ///
    /// # Errors
    /// Returns `Encoding(EncodeError)` if serialization fails.
    pub fn to_msl_encoding(
        &self,
        encoder: &EncoderFactory,
        format: EncoderFormat,
    ) -> Result<Vec<u8>, AuthError> {
        encoder.encode_object(&self.to_document(encoder), format)
    }

    /// Parse an entity authentication envelope, dispatching on its scheme.
    ///
    /// # Errors
    /// - `Encoding(ParseError)` if `scheme` or `authdata` is missing or
    ///   wrongly typed.
    /// - `EntityAuth(UnidentifiedEntityAuthScheme)` if the scheme name is
    ///   not recognized.
    /// - `EntityAuth(EntityAuthFactoryNotFound)` if no factory is registered.
    /// - Whatever the factory reports for the `authdata` object.
    pub async fn parse(ctx: &MslContext, document: &Document) -> Result<Self, AuthError> {
        let name = document.get_string(KEY_SCHEME)?;
        debug!("parsing entity authentication data for scheme {name}");

        let Some(scheme) = EntityAuthenticationScheme::from_name(name) else {
            warn!("unidentified entity authentication scheme {name}");
            return Err(
                AuthError::entity(MslError::UnidentifiedEntityAuthScheme).with_detail(name)
            );
        };

        let Some(factory) = ctx.entity_authentication_factory(scheme) else {
            warn!("no entity authentication factory registered for {scheme}");
            return Err(AuthError::entity(MslError::EntityAuthFactoryNotFound)
                .with_detail(name)
                .with_scheme(scheme.name()));
        };

        let authdata = document.get_document(KEY_AUTHDATA)?;
        let data = factory
            .create_data(ctx, &authdata)
            .await
            .map_err(|e| e.with_scheme(scheme.name()))
            .inspect_err(|e| warn!("rejected entity authentication data: {e}"))?;
        debug!("parsed {scheme} entity authentication data for {}", data.identity());
        Ok(data)
    }
}
