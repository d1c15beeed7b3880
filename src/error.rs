//! Error types for UUID parsing and decoding.

use thiserror::Error;

/// Errors that can occur when constructing a [`Uuid`](crate::Uuid) from text
/// or bytes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UuidError {
    /// No construction rule matched the given input.
    #[error("unsupported uuid constructor or hint")]
    UnsupportedInput,

    /// The hex text could not be decoded.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The Base64 text could not be decoded.
    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The decoded payload was not exactly 16 bytes.
    #[error("expected 16 bytes, got {actual}")]
    WrongLength { actual: usize },
}

impl UuidError {
    /// Returns true if this error indicates that no construction rule matched.
    pub fn is_unsupported_input(&self) -> bool {
        matches!(self, UuidError::UnsupportedInput)
    }

    /// Returns true if this error indicates malformed hex or Base64 text.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            UuidError::InvalidHex(_) | UuidError::InvalidBase64(_) | UuidError::WrongLength { .. }
        )
    }
}
