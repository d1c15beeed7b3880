//! Supporting types for UUID construction and rendering.

use serde::{Deserialize, Serialize};

/// The representation a [`Uuid`](crate::Uuid) was constructed from.
///
/// Informational only: it records how an instance was built and has no effect
/// on equality, ordering, or the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidInitializer {
    /// Built from hyphenated hex text (or freshly generated).
    Hex,
    /// Built from Base64 text.
    Base64,
    /// Built from a raw 16-byte value.
    Buffer,
}

impl std::fmt::Display for UuidInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UuidInitializer::Hex => write!(f, "hex"),
            UuidInitializer::Base64 => write!(f, "base64"),
            UuidInitializer::Buffer => write!(f, "buffer"),
        }
    }
}

/// Construction input for a [`Uuid`](crate::Uuid), tagged with its
/// representation.
///
/// Each variant is dispatched exactly once by
/// [`Uuid::from_source`](crate::Uuid::from_source); there is no runtime
/// sniffing of the payload. Use [`Uuid::parse`](crate::Uuid::parse) when the
/// representation of a string is not known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidSource<'a> {
    /// Generate a fresh time-ordered identifier.
    Generate,
    /// Hex text, with or without hyphens.
    Hex(&'a str),
    /// Standard-alphabet Base64 text.
    Base64(&'a str),
    /// A raw 16-byte value, trusted as-is.
    Bytes([u8; 16]),
}

/// Text encodings a [`Uuid`](crate::Uuid) can render to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Canonical hyphenated lowercase hex (the default).
    #[default]
    Hex,
    /// Standard-alphabet Base64.
    Base64,
}
