//! Entity authentication scheme identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity authentication schemes.
///
/// Adding a scheme means adding a variant here, a data variant in
/// [`super::EntityAuthenticationData`], and a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityAuthenticationScheme {
    /// Unauthenticated entity with a plain identity.
    #[serde(rename = "NONE")]
    None,
    /// Unauthenticated entity identified by a root and a suffix.
    #[serde(rename = "NONE_SUFFIXED")]
    NoneSuffixed,
    /// Pre-shared keys.
    #[serde(rename = "PSK")]
    Psk,
    /// RSA public key.
    #[serde(rename = "RSA")]
    Rsa,
    /// Elliptic curve public key.
    #[serde(rename = "ECC")]
    Ecc,
    /// X.509 certificate.
    #[serde(rename = "X509")]
    X509,
}

impl EntityAuthenticationScheme {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::NoneSuffixed,
        Self::Psk,
        Self::Rsa,
        Self::Ecc,
        Self::X509,
    ];

    /// The wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::NoneSuffixed => "NONE_SUFFIXED",
            Self::Psk => "PSK",
            Self::Rsa => "RSA",
            Self::Ecc => "ECC",
            Self::X509 => "X509",
        }
    }

    /// Resolve a wire name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Whether the scheme provides encryption.
    #[must_use]
    pub const fn encrypts(self) -> bool {
        matches!(self, Self::Psk)
    }

    /// Whether the scheme provides integrity protection.
    #[must_use]
    pub const fn protects_integrity(self) -> bool {
        !matches!(self, Self::None | Self::NoneSuffixed)
    }
}

impl fmt::Display for EntityAuthenticationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
