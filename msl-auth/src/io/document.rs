//! Key/value document with typed accessors.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::error::{AuthError, MslError};

/// A format-agnostic key/value object.
///
/// Binary values are stored as standard base64 text so that every format can
/// represent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn put_string(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), Value::String(value.into()));
    }

    pub fn put_bytes(&mut self, key: &str, value: &[u8]) {
        self.put_string(key, STANDARD.encode(value));
    }

    pub fn put_document(&mut self, key: &str, value: Self) {
        self.fields.insert(key.to_string(), Value::Object(value.fields));
    }

    /// Get a mandatory string field.
    ///
    /// # Errors
    /// Returns `ParseError` if the field is absent or not a string.
    pub fn get_string(&self, key: &str) -> Result<&str, AuthError> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(AuthError::encoding(MslError::ParseError)
                .with_detail(format!("field '{key}' is not a string"))),
            None => Err(missing(key)),
        }
    }

    /// Get a mandatory nested document.
    ///
    /// # Errors
    /// Returns `ParseError` if the field is absent or not an object.
    pub fn get_document(&self, key: &str) -> Result<Self, AuthError> {
        match self.fields.get(key) {
            Some(Value::Object(map)) => Ok(Self::from_map(map.clone())),
            Some(_) => Err(AuthError::encoding(MslError::ParseError)
                .with_detail(format!("field '{key}' is not an object"))),
            None => Err(missing(key)),
        }
    }

    /// Get a mandatory binary field.
    ///
    /// # Errors
    /// Returns `ParseError` if the field is absent, not a string, or not
    /// valid base64.
    pub fn get_bytes(&self, key: &str) -> Result<Vec<u8>, AuthError> {
        let text = self.get_string(key)?;
        STANDARD.decode(text).map_err(|_| {
            AuthError::encoding(MslError::ParseError)
                .with_detail(format!("field '{key}' is not valid base64"))
        })
    }

    /// Remove a field. Returns `true` if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.fields.remove(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to a value with keys in sorted order at every level.
    pub(crate) fn to_canonical_value(&self) -> Value {
        canonicalize_map(&self.fields)
    }
}

fn missing(key: &str) -> AuthError {
    AuthError::encoding(MslError::ParseError).with_detail(format!("missing field '{key}'"))
}

fn canonicalize_map(map: &Map<String, Value>) -> Value {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    let mut sorted = Map::new();
    for key in keys {
        if let Some(value) = map.get(key) {
            sorted.insert(key.clone(), canonicalize(value));
        }
    }
    Value::Object(sorted)
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => canonicalize_map(map),
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
