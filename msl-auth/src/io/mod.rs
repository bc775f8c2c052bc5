//! Encoded object adapter.
//!
//! A [`Document`] is a format-agnostic key/value object with typed accessors.
//! The [`EncoderFactory`] creates documents and converts them to and from
//! bytes in an [`EncoderFormat`].
//!
//! # Invariants
//! - Encoding is canonical: keys are emitted in sorted order, so two equal
//!   documents always encode to identical bytes.
//! - Typed getters never panic on attacker-controlled input; a missing or
//!   wrongly typed field is `MslError::ParseError`.

pub mod document;
pub mod encoder;

pub use document::Document;
pub use encoder::{EncoderFactory, EncoderFormat};
