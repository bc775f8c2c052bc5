use futures::future::BoxFuture;

use super::{MslUser, UserAuthenticationData, UserAuthenticationScheme};
use crate::context::MslContext;
use crate::error::{AuthError, FactoryError};
use crate::io::Document;

/// Validates user authentication data for one scheme.
pub trait UserAuthenticationFactory: Send + Sync {
    /// The scheme this factory handles.
    fn scheme(&self) -> UserAuthenticationScheme;

    /// Parse the scheme-specific `authdata` object.
    ///
    /// # Errors
    /// Returns `Encoding(ParseError)` if a mandatory field is missing or
    /// wrongly typed.
    fn create_data<'a>(
        &'a self,
        ctx: &'a MslContext,
        authdata: &'a Document,
    ) -> BoxFuture<'a, Result<UserAuthenticationData, AuthError>>;

    /// Authenticate the user on behalf of the entity `identity`.
    ///
    /// # Errors
    /// Returns `FactoryError::Rejected` if the credentials are not accepted,
    /// and `FactoryError::Internal` if `data` belongs to another scheme.
    fn authenticate<'a>(
        &'a self,
        ctx: &'a MslContext,
        identity: &'a str,
        data: &'a UserAuthenticationData,
    ) -> BoxFuture<'a, Result<MslUser, FactoryError>>;
}
