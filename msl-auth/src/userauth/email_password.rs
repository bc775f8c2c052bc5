//! `EMAIL_PASSWORD`: a user identified by email address and password.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use super::{
    EmailPasswordStore, MslUser, UserAuthenticationData, UserAuthenticationFactory,
    UserAuthenticationScheme,
};
use crate::context::MslContext;
use crate::error::{AuthError, FactoryError, MslError};
use crate::io::{Document, EncoderFactory};
use crate::util::AuthenticationUtils;

const KEY_EMAIL: &str = "email";
const KEY_PASSWORD: &str = "password";

/// Email/password user authentication data. `Debug` never shows the password.
///
/// The email is stored trimmed, so the identity reported for the data is the
/// one credentials are looked up by.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EmailPasswordAuthenticationData {
    email: String,
    password: String,
}

impl EmailPasswordAuthenticationData {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email: String = email.into();
        Self {
            email: email.trim().to_string(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn auth_data(&self, encoder: &EncoderFactory) -> Document {
        let mut authdata = encoder.create_object();
        authdata.put_string(KEY_EMAIL, self.email.as_str());
        authdata.put_string(KEY_PASSWORD, self.password.as_str());
        authdata
    }

    /// # Errors
    /// Returns `Encoding(ParseError)` if `email` or `password` is missing or
    /// not a string. Empty values parse; they are rejected at authentication.
    pub fn parse(authdata: &Document) -> Result<Self, AuthError> {
        let email = authdata.get_string(KEY_EMAIL)?;
        let password = authdata.get_string(KEY_PASSWORD)?;
        Ok(Self::new(email, password))
    }
}

impl fmt::Debug for EmailPasswordAuthenticationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailPasswordAuthenticationData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub struct EmailPasswordAuthenticationFactory {
    store: Arc<dyn EmailPasswordStore>,
    utils: Arc<dyn AuthenticationUtils>,
}

impl EmailPasswordAuthenticationFactory {
    #[must_use]
    pub fn new(store: Arc<dyn EmailPasswordStore>, utils: Arc<dyn AuthenticationUtils>) -> Self {
        Self { store, utils }
    }
}

impl UserAuthenticationFactory for EmailPasswordAuthenticationFactory {
    fn scheme(&self) -> UserAuthenticationScheme {
        UserAuthenticationScheme::EmailPassword
    }

    fn create_data<'a>(
        &'a self,
        _ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<UserAuthenticationData, AuthError>> {
        Box::pin(async move {
            EmailPasswordAuthenticationData::parse(authdata)
                .map(UserAuthenticationData::EmailPassword)
        })
    }

    fn authenticate<'a>(
        &'a self,
        _ctx: &'a MslContext,
        identity: &'a str,
        data: &'a UserAuthenticationData,
    ) -> BoxFuture<'a, Result<MslUser, FactoryError>> {
        Box::pin(async move {
            let UserAuthenticationData::EmailPassword(data) = data;
            let scheme = self.scheme();

            if !self.utils.is_user_scheme_permitted(identity, scheme) {
                warn!("entity {identity} is not permitted to use {scheme}");
                return Err(AuthError::user(MslError::UserAuthSchemeNotPermitted)
                    .with_detail(identity.to_string())
                    .with_scheme(scheme.name())
                    .into());
            }

            let email = data.email();
            let password = data.password();
            if email.is_empty() || password.trim().is_empty() {
                return Err(AuthError::user(MslError::EmailPasswordBlank)
                    .with_scheme(scheme.name())
                    .into());
            }

            let Some(user) = self.store.is_user(email, password) else {
                warn!("incorrect email or password for {email}");
                return Err(AuthError::user(MslError::EmailPasswordIncorrect)
                    .with_detail(email.to_string())
                    .with_scheme(scheme.name())
                    .into());
            };
            debug!("authenticated user {user} for entity {identity}");
            Ok(user)
        })
    }
}
