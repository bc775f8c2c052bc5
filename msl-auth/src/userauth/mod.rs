//! User authentication.
//!
//! User authentication data travels in the same `{scheme, authdata}`
//! envelope as entity authentication data and is dispatched the same way.
//! A parsed record is checked against the user store with
//! [`UserAuthenticationFactory::authenticate`], which yields an [`MslUser`].

mod data;
mod email_password;
mod factory;
mod scheme;
mod store;
mod user;

pub use data::UserAuthenticationData;
pub use email_password::{EmailPasswordAuthenticationData, EmailPasswordAuthenticationFactory};
pub use factory::UserAuthenticationFactory;
pub use scheme::UserAuthenticationScheme;
pub use store::{EmailPasswordStore, StaticEmailPasswordStore};
pub use user::MslUser;
