//! Trusted X.509 certificates.

use std::sync::{PoisonError, RwLock};

use x509_parser::certificate::X509Certificate;
use x509_parser::parse_x509_certificate;
use x509_parser::pem::Pem;

use super::KeyStoreError;

/// A set of trust anchors.
///
/// A certificate is trusted when it is signed by an anchor whose subject
/// matches the certificate's issuer. A self-signed anchor is trusted by
/// itself. Validity periods are checked by the caller.
#[derive(Debug, Default)]
pub struct X509Store {
    anchors: RwLock<Vec<Vec<u8>>>,
}

impl X509Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a DER-encoded trust anchor.
    ///
    /// # Errors
    /// Returns `KeyStoreError::InvalidCertificate` if the bytes are not a
    /// single certificate.
    pub fn add_trusted(&self, der: &[u8]) -> Result<(), KeyStoreError> {
        let (rest, _) = parse_x509_certificate(der)
            .map_err(|e| KeyStoreError::InvalidCertificate(e.to_string()))?;
        if !rest.is_empty() {
            return Err(KeyStoreError::InvalidCertificate(
                "trailing bytes after certificate".to_string(),
            ));
        }
        self.anchors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(der.to_vec());
        Ok(())
    }

    /// Add every `CERTIFICATE` block of a PEM bundle. Other blocks are skipped.
    ///
    /// Returns the number of certificates added.
    ///
    /// # Errors
    /// Returns `KeyStoreError::InvalidCertificate` if the PEM framing or any
    /// certificate is invalid. Certificates before the bad one stay added.
    pub fn add_trusted_pem(&self, pem: &[u8]) -> Result<usize, KeyStoreError> {
        let mut added = 0;
        for block in Pem::iter_from_buffer(pem) {
            let block = block.map_err(|e| KeyStoreError::InvalidCertificate(e.to_string()))?;
            if block.label != "CERTIFICATE" {
                continue;
            }
            self.add_trusted(&block.contents)?;
            added += 1;
        }
        Ok(added)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `cert` is signed by one of the anchors.
    #[must_use]
    pub fn is_trusted(&self, cert: &X509Certificate<'_>) -> bool {
        let anchors = self.anchors.read().unwrap_or_else(PoisonError::into_inner);
        anchors.iter().any(|der| {
            let Ok((_, anchor)) = parse_x509_certificate(der) else {
                return false;
            };
            anchor.subject().as_raw() == cert.issuer().as_raw()
                && cert.verify_signature(Some(anchor.public_key())).is_ok()
        })
    }
}
