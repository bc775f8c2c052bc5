//! Entity authentication.
//!
//! An entity authentication record arrives as `{scheme, authdata}`.
//! [`EntityAuthenticationData::parse`] resolves the scheme, looks up the
//! registered [`EntityAuthenticationFactory`] in the [`MslContext`] and lets it
//! parse `authdata`. The same factory later derives the crypto context for
//! the parsed data.
//!
//! # Invariants
//! - Parsing never panics on peer input; every failure is one classified
//!   [`AuthError`].
//! - A factory only accepts data of its own scheme. Anything else is an
//!   [`InternalError`].
//!
//! [`MslContext`]: crate::context::MslContext
//! [`AuthError`]: crate::error::AuthError
//! [`InternalError`]: crate::error::InternalError

mod data;
mod ecc;
mod factory;
mod psk;
mod rsa;
mod scheme;
mod unauthenticated;
mod unauthenticated_suffixed;
mod x509;

pub use data::{EntityAuthenticationData, KEY_AUTHDATA, KEY_SCHEME};
pub use ecc::{EccAuthenticationData, EccAuthenticationFactory};
pub use factory::EntityAuthenticationFactory;
pub use psk::{PresharedAuthenticationData, PresharedAuthenticationFactory};
pub use rsa::{RsaAuthenticationData, RsaAuthenticationFactory};
pub use scheme::EntityAuthenticationScheme;
pub use unauthenticated::{UnauthenticatedAuthenticationData, UnauthenticatedAuthenticationFactory};
pub use unauthenticated_suffixed::{
    UnauthenticatedSuffixedAuthenticationData, UnauthenticatedSuffixedAuthenticationFactory,
};
pub use x509::{X509AuthenticationData, X509AuthenticationFactory};
