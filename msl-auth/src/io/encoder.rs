//! Document encoder factory.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Document;
use crate::error::{AuthError, MslError};

/// Wire format for encoded documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EncoderFormat {
    /// UTF-8 JSON text.
    #[default]
    #[serde(rename = "JSON")]
    Json,
}

impl EncoderFormat {
    /// All formats this encoder can produce, in order of preference.
    pub const SUPPORTED: [Self; 1] = [Self::Json];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::SUPPORTED.into_iter().find(|f| f.name() == name)
    }
}

/// Creates documents and converts them to and from bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderFactory {
    default_format: EncoderFormat,
}

impl EncoderFactory {
    #[must_use]
    pub const fn new(default_format: EncoderFormat) -> Self {
        Self { default_format }
    }

    #[must_use]
    pub const fn default_format(&self) -> EncoderFormat {
        self.default_format
    }

    /// Pick the format to use when talking to a peer that supports `formats`.
    ///
    /// Falls back to the default format when there is no common format.
    #[must_use]
    pub fn preferred_format(&self, formats: &[EncoderFormat]) -> EncoderFormat {
        EncoderFormat::SUPPORTED
            .into_iter()
            .find(|f| formats.contains(f))
            .unwrap_or(self.default_format)
    }

    #[must_use]
    pub fn create_object(&self) -> Document {
        Document::new()
    }

    /// Decode bytes into a document.
    ///
    /// # Errors
    /// Returns `ParseError` if the bytes are not a single encoded object.
    pub fn parse_object(&self, bytes: &[u8]) -> Result<Document, AuthError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            AuthError::encoding(MslError::ParseError).with_detail(format!("invalid JSON: {e}"))
        })?;
        match value {
            Value::Object(map) => Ok(Document::from_map(map)),
            _ => Err(AuthError::encoding(MslError::ParseError)
                .with_detail("encoded value is not an object")),
        }
    }

    /// Encode a document into canonical bytes.
    ///
    /// # Errors
    /// Returns `EncodeError` if serialization fails.
    pub fn encode_object(
        &self,
        document: &Document,
        format: EncoderFormat,
    ) -> Result<Vec<u8>, AuthError> {
        match format {
            EncoderFormat::Json => serde_json::to_vec(&document.to_canonical_value())
                .map_err(|e| AuthError::encoding(MslError::EncodeError).with_detail(e.to_string())),
        }
    }
}
