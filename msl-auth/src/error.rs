//! Error taxonomy for authentication parsing and crypto context derivation.
//!
//! Failures caused by the peer (malformed documents, unknown schemes,
//! rejected credentials) and local availability problems (a missing factory)
//! are reported as [`AuthError`]. Programming defects, such as handing a
//! factory data of the wrong scheme, are reported as [`InternalError`], which
//! has no conversion into `AuthError`.
//!
//! # Invariants
//! - Every `MslError` has a stable numeric code that never changes meaning.
//! - Error messages never contain key material, passwords or certificate bytes.

use std::fmt;

/// Coarse classification of a recoverable failure, as reported to peers and
/// operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A mandatory field is missing or has the wrong shape.
    Malformed,
    /// The scheme name is not a recognized scheme.
    UnknownScheme,
    /// The scheme is recognized but no factory is registered for it.
    Unavailable,
    /// The data parsed but the credentials or key material were rejected.
    Rejected,
}

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MslError {
    /// A mandatory field is missing or has the wrong type.
    ParseError,
    /// A document could not be serialized.
    EncodeError,

    /// The entity authentication scheme name is not recognized.
    UnidentifiedEntityAuthScheme,
    /// No entity authentication factory is registered for the scheme.
    EntityAuthFactoryNotFound,
    /// The entity identity has been revoked.
    EntityRevoked,
    /// The entity is not permitted to use the scheme it presented.
    IncorrectEntityAuthData,
    /// No pre-shared keys exist for the entity identity.
    EntityNotFound,
    /// No RSA public key exists for the key identifier.
    RsaPublicKeyNotFound,
    /// No ECC public key exists for the key identifier.
    EccPublicKeyNotFound,
    /// The X.509 certificate is outside its validity period.
    X509CertExpired,
    /// The X.509 certificate does not chain to a trusted certificate.
    X509CertVerificationFailed,

    /// The user authentication scheme name is not recognized.
    UnidentifiedUserAuthScheme,
    /// No user authentication factory is registered for the scheme.
    UserAuthFactoryNotFound,
    /// The email address or password is empty.
    EmailPasswordBlank,
    /// The email address and password do not identify a user.
    EmailPasswordIncorrect,
    /// The entity is not permitted to use the user authentication scheme.
    UserAuthSchemeNotPermitted,

    /// The X.509 certificate could not be decoded.
    X509CertParseError,
    /// Key material could not be loaded.
    InvalidKey,
    /// The crypto context does not support encryption.
    EncryptNotSupported,
    /// The crypto context does not support decryption.
    DecryptNotSupported,
    /// The crypto context holds no signing key.
    SignNotSupported,
    /// Computing or checking a signature failed.
    SignatureError,
}

impl MslError {
    /// Stable numeric code.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::ParseError => 1000,
            Self::EncodeError => 1001,
            Self::UnidentifiedEntityAuthScheme => 2000,
            Self::EntityAuthFactoryNotFound => 2001,
            Self::EntityRevoked => 2002,
            Self::IncorrectEntityAuthData => 2003,
            Self::EntityNotFound => 2004,
            Self::RsaPublicKeyNotFound => 2005,
            Self::EccPublicKeyNotFound => 2006,
            Self::X509CertExpired => 2007,
            Self::X509CertVerificationFailed => 2008,
            Self::UnidentifiedUserAuthScheme => 3000,
            Self::UserAuthFactoryNotFound => 3001,
            Self::EmailPasswordBlank => 3002,
            Self::EmailPasswordIncorrect => 3003,
            Self::UserAuthSchemeNotPermitted => 3004,
            Self::X509CertParseError => 4000,
            Self::InvalidKey => 4001,
            Self::EncryptNotSupported => 4002,
            Self::DecryptNotSupported => 4003,
            Self::SignNotSupported => 4004,
            Self::SignatureError => 4005,
        }
    }

    /// Human-readable message. Never includes request data.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ParseError => "error parsing encoded document",
            Self::EncodeError => "error encoding document",
            Self::UnidentifiedEntityAuthScheme => "unable to identify entity authentication scheme",
            Self::EntityAuthFactoryNotFound => {
                "no factory registered for entity authentication scheme"
            }
            Self::EntityRevoked => "entity is revoked",
            Self::IncorrectEntityAuthData => {
                "entity authentication scheme not permitted for entity"
            }
            Self::EntityNotFound => "entity not recognized",
            Self::RsaPublicKeyNotFound => "RSA public key not found",
            Self::EccPublicKeyNotFound => "ECC public key not found",
            Self::X509CertExpired => "X.509 certificate is expired or not yet valid",
            Self::X509CertVerificationFailed => "X.509 certificate verification failed",
            Self::UnidentifiedUserAuthScheme => "unable to identify user authentication scheme",
            Self::UserAuthFactoryNotFound => "no factory registered for user authentication scheme",
            Self::EmailPasswordBlank => "email or password is blank",
            Self::EmailPasswordIncorrect => "email or password is incorrect",
            Self::UserAuthSchemeNotPermitted => {
                "user authentication scheme not permitted for entity"
            }
            Self::X509CertParseError => "error parsing X.509 certificate",
            Self::InvalidKey => "invalid key material",
            Self::EncryptNotSupported => "encryption not supported",
            Self::DecryptNotSupported => "decryption not supported",
            Self::SignNotSupported => "signing not supported",
            Self::SignatureError => "signature operation failed",
        }
    }

    /// The classification reported to peers and operators.
    #[must_use]
    pub const fn classification(self) -> Classification {
        match self {
            Self::ParseError | Self::EncodeError | Self::X509CertParseError => {
                Classification::Malformed
            }
            Self::UnidentifiedEntityAuthScheme | Self::UnidentifiedUserAuthScheme => {
                Classification::UnknownScheme
            }
            Self::EntityAuthFactoryNotFound | Self::UserAuthFactoryNotFound => {
                Classification::Unavailable
            }
            _ => Classification::Rejected,
        }
    }
}

impl fmt::Display for MslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// A classified failure with optional diagnostic context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    error: MslError,
    detail: Option<String>,
    scheme: Option<String>,
}

impl Failure {
    #[must_use]
    pub const fn new(error: MslError) -> Self {
        Self {
            error,
            detail: None,
            scheme: None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> MslError {
        self.error
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Name of the scheme being processed when the failure occurred.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        if let Some(scheme) = &self.scheme {
            write!(f, " [scheme {scheme}]")?;
        }
        Ok(())
    }
}

/// Recoverable authentication error.
///
/// The variant names the layer that detected the failure; the wrapped
/// [`Failure`] carries the stable code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Document decoding or encoding failed.
    Encoding(Failure),
    /// Entity authentication was rejected or could not be dispatched.
    EntityAuth(Failure),
    /// User authentication was rejected or could not be dispatched.
    UserAuth(Failure),
    /// Key material or a cryptographic operation failed.
    Crypto(Failure),
}

impl AuthError {
    #[must_use]
    pub const fn encoding(error: MslError) -> Self {
        Self::Encoding(Failure::new(error))
    }

    #[must_use]
    pub const fn entity(error: MslError) -> Self {
        Self::EntityAuth(Failure::new(error))
    }

    #[must_use]
    pub const fn user(error: MslError) -> Self {
        Self::UserAuth(Failure::new(error))
    }

    #[must_use]
    pub const fn crypto(error: MslError) -> Self {
        Self::Crypto(Failure::new(error))
    }

    /// Attach a diagnostic detail. Callers must not pass secrets.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.failure_mut().detail = Some(detail.into());
        self
    }

    /// Attach the scheme name, keeping any scheme already recorded.
    #[must_use]
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        let failure = self.failure_mut();
        if failure.scheme.is_none() {
            failure.scheme = Some(scheme.to_string());
        }
        self
    }

    #[must_use]
    pub const fn failure(&self) -> &Failure {
        match self {
            Self::Encoding(f) | Self::EntityAuth(f) | Self::UserAuth(f) | Self::Crypto(f) => f,
        }
    }

    const fn failure_mut(&mut self) -> &mut Failure {
        match self {
            Self::Encoding(f) | Self::EntityAuth(f) | Self::UserAuth(f) | Self::Crypto(f) => f,
        }
    }

    #[must_use]
    pub const fn error(&self) -> MslError {
        self.failure().error
    }

    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.failure().error.classification()
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(failure) => write!(f, "encoding error: {failure}"),
            Self::EntityAuth(failure) => write!(f, "entity authentication error: {failure}"),
            Self::UserAuth(failure) => write!(f, "user authentication error: {failure}"),
            Self::Crypto(failure) => write!(f, "crypto error: {failure}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// A caller defect detected inside the subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalError {
    message: String,
}

impl InternalError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal error: {}", self.message)
    }
}

impl std::error::Error for InternalError {}

/// Outcome of a factory operation that can fail either on peer input or on a
/// caller defect.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// The peer's data was rejected; recoverable.
    Rejected(AuthError),
    /// The caller violated the factory contract; not recoverable.
    Internal(InternalError),
}

impl FactoryError {
    /// The recoverable error, if this is not a defect.
    #[must_use]
    pub const fn as_rejected(&self) -> Option<&AuthError> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Internal(_) => None,
        }
    }

    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl From<AuthError> for FactoryError {
    fn from(e: AuthError) -> Self {
        Self::Rejected(e)
    }
}

impl From<InternalError> for FactoryError {
    fn from(e: InternalError) -> Self {
        Self::Internal(e)
    }
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "{e}"),
            Self::Internal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FactoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Internal(e) => Some(e),
        }
    }
}
