use tracing::{debug, warn};

use super::{EmailPasswordAuthenticationData, UserAuthenticationScheme};
use crate::context::MslContext;
use crate::entityauth::{KEY_AUTHDATA, KEY_SCHEME};
use crate::error::{AuthError, MslError};
use crate::io::{Document, EncoderFactory, EncoderFormat};

/// User authentication data of any supported scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAuthenticationData {
    EmailPassword(EmailPasswordAuthenticationData),
}

impl UserAuthenticationData {
    #[must_use]
    pub const fn scheme(&self) -> UserAuthenticationScheme {
        match self {
            Self::EmailPassword(_) => UserAuthenticationScheme::EmailPassword,
        }
    }

    /// The claimed user identity.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            Self::EmailPassword(d) => d.email(),
        }
    }

    #[must_use]
    pub fn auth_data(&self, encoder: &EncoderFactory) -> Document {
        match self {
            Self::EmailPassword(d) => d.auth_data(encoder),
        }
    }

    #[must_use]
    pub fn to_document(&self, encoder: &EncoderFactory) -> Document {
        let mut document = encoder.create_object();
        document.put_string(KEY_SCHEME, self.scheme().name());
        document.put_document(KEY_AUTHDATA, self.auth_data(encoder));
        document
    }

    /// # Errors
    /// Returns `Encoding(EncodeError)` if serialization fails.
    pub fn to_msl_encoding(
        &self,
        encoder: &EncoderFactory,
        format: EncoderFormat,
    ) -> Result<Vec<u8>, AuthError> {
        encoder.encode_object(&self.to_document(encoder), format)
    }

    /// Parse a user authentication envelope, dispatching on its scheme.
    ///
    /// # Errors
    /// - `Encoding(ParseError)` if `scheme` or `authdata` is missing or
    ///   wrongly typed.
    /// - `UserAuth(UnidentifiedUserAuthScheme)` if the scheme name is not
    ///   recognized.
    /// - `UserAuth(UserAuthFactoryNotFound)` if no factory is registered.
    /// - Whatever the factory reports for the `authdata` object.
    pub async fn parse(ctx: &MslContext, document: &Document) -> Result<Self, AuthError> {
        let name = document.get_string(KEY_SCHEME)?;
        debug!("parsing user authentication data for scheme {name}");

        let Some(scheme) = UserAuthenticationScheme::from_name(name) else {
            warn!("unidentified user authentication scheme {name}");
            return Err(AuthError::user(MslError::UnidentifiedUserAuthScheme).with_detail(name));
        };

        let Some(factory) = ctx.user_authentication_factory(scheme) else {
            warn!("no user authentication factory registered for {scheme}");
            return Err(AuthError::user(MslError::UserAuthFactoryNotFound)
                .with_detail(name)
                .with_scheme(scheme.name()));
        };

        let authdata = document.get_document(KEY_AUTHDATA)?;
        factory
            .create_data(ctx, &authdata)
            .await
            .map_err(|e| e.with_scheme(scheme.name()))
            .inspect_err(|e| warn!("rejected user authentication data: {e}"))
    }
}
