// Life of an authentication record:
// 1. Bytes come in
// 2. Decode into a document (`io`)
// 3. Read `scheme`, resolve it, look up the factory in the context
// 4. The factory parses `authdata` into typed data
// 5. Entity records: the factory derives a crypto context
//    User records: the factory authenticates the user
//
// System components:
//  - Document encoder
//  - Scheme registries owned by `MslContext`
//  - Per-scheme factories backed by key stores and revocation policy

pub mod config;
pub mod context;
pub mod crypto;
pub mod entityauth;
pub mod error;
pub mod io;
pub mod keys;
pub mod registry;
pub mod userauth;
pub mod util;

#[cfg(test)]
mod e2e_tests;
#[cfg(test)]
mod testing;

pub use context::{MslContext, MslContextBuilder};
pub use error::{AuthError, Classification, FactoryError, InternalError, MslError};
