//! The UUID value type and its representation conversions.
//!
//! The canonical form is always the 16-byte binary value; hex and Base64 are
//! derived renderings. Construction normalizes whichever representation the
//! caller holds into the canonical form.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::{TextEncoding, UuidError, UuidInitializer, UuidSource};

/// Number of bytes in the canonical binary representation.
pub const UUID_LEN: usize = 16;

/// A 128-bit UUID normalized to a 16-byte binary value.
///
/// Supports construction from hyphenated hex text, standard Base64 text, and
/// raw bytes, and renders back to each. Instances are immutable; equality,
/// ordering, and hashing consider only the binary value, never the
/// [`UuidInitializer`] tag.
///
/// The hinted constructors ([`from_hex`](Uuid::from_hex),
/// [`from_base64`](Uuid::from_base64), [`from_bytes`](Uuid::from_bytes))
/// decode without running the UUID-shape validator; callers that hold
/// untrusted text should go through [`parse`](Uuid::parse) or
/// [`try_parse`](Uuid::try_parse) instead.
#[derive(Debug, Clone, Copy)]
pub struct Uuid {
    value: [u8; UUID_LEN],
    initializer: UuidInitializer,
}

impl Uuid {
    /// Generates a fresh time-ordered (UUIDv7) identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: uuid::Uuid::now_v7().into_bytes(),
            initializer: UuidInitializer::Hex,
        }
    }

    /// Constructs a UUID from a tagged source, dispatching once on the
    /// variant.
    ///
    /// The `Hex` and `Base64` variants decode without validating the result
    /// against the UUID shape; `Bytes` is accepted as-is. `Generate` cannot
    /// fail.
    pub fn from_source(source: UuidSource<'_>) -> Result<Self, UuidError> {
        match source {
            UuidSource::Generate => Ok(Self::new()),
            UuidSource::Hex(s) => Ok(Self {
                value: Self::bytes_from_hex(s)?,
                initializer: UuidInitializer::Hex,
            }),
            UuidSource::Base64(s) => Ok(Self {
                value: to_array(&BASE64.decode(s)?)?,
                initializer: UuidInitializer::Base64,
            }),
            UuidSource::Bytes(value) => Ok(Self::from_bytes(value)),
        }
    }

    /// Constructs a UUID from hex text, with or without hyphens.
    pub fn from_hex(s: &str) -> Result<Self, UuidError> {
        Self::from_source(UuidSource::Hex(s))
    }

    /// Constructs a UUID from standard-alphabet Base64 text.
    pub fn from_base64(s: &str) -> Result<Self, UuidError> {
        Self::from_source(UuidSource::Base64(s))
    }

    /// Constructs a UUID from a raw 16-byte value.
    ///
    /// The bytes are trusted as-is: no validation is performed. This is the
    /// fast path for callers that already hold a known-good value; untrusted
    /// byte slices should go through [`from_slice`](Uuid::from_slice), which
    /// does validate.
    #[must_use]
    pub const fn from_bytes(value: [u8; UUID_LEN]) -> Self {
        Self {
            value,
            initializer: UuidInitializer::Buffer,
        }
    }

    /// Constructs a UUID from a byte slice, validating its shape.
    ///
    /// The slice must be exactly 16 bytes and its hex rendering must pass
    /// [`is_hex_string`](Uuid::is_hex_string).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, UuidError> {
        let value = to_array(bytes)?;
        if !Self::is_hex_string(&Self::hex_from_bytes(&value)) {
            return Err(UuidError::UnsupportedInput);
        }
        Ok(Self::from_bytes(value))
    }

    /// Parses a string whose representation is not known up front.
    ///
    /// Tries hyphenated hex first, then Base64; each candidate is accepted
    /// only if the decoded value passes the UUID-shape validator. Fails with
    /// [`UuidError::UnsupportedInput`] when neither matches.
    pub fn parse(s: &str) -> Result<Self, UuidError> {
        if Self::is_hex_string(s) {
            return Self::from_source(UuidSource::Hex(s));
        }
        if let Some(value) = Self::base64_bytes(s) {
            return Ok(Self {
                value,
                initializer: UuidInitializer::Base64,
            });
        }
        Err(UuidError::UnsupportedInput)
    }

    /// Non-panicking [`parse`](Uuid::parse): the recommended entry point for
    /// untrusted input. Returns `None` for any string that is neither a
    /// valid hex nor a valid Base64 UUID.
    #[must_use]
    pub fn try_parse(s: &str) -> Option<Self> {
        Self::parse(s).ok()
    }

    /// Returns true iff `s` is a hyphenated 8-4-4-4-12 hex UUID with
    /// accepted version and variant bits (versions 1-8 under the RFC 4122
    /// variant, plus the nil and max UUIDs).
    #[must_use]
    pub fn is_hex_string(s: &str) -> bool {
        let hyphenated_shape = s.len() == 36
            && s.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => b.is_ascii_hexdigit(),
            });
        if !hyphenated_shape {
            return false;
        }
        let Ok(parsed) = uuid::Uuid::try_parse(s) else {
            return false;
        };
        parsed.is_nil()
            || parsed.is_max()
            || (matches!(parsed.get_version_num(), 1..=8)
                && parsed.get_variant() == uuid::Variant::RFC4122)
    }

    /// Decodes `s` as Base64 and returns the bytes iff they are exactly 16
    /// and their hex rendering passes [`is_hex_string`](Uuid::is_hex_string).
    #[must_use]
    pub fn base64_bytes(s: &str) -> Option<[u8; UUID_LEN]> {
        let value = to_array(&BASE64.decode(s).ok()?).ok()?;
        Self::is_hex_string(&Self::hex_from_bytes(&value)).then_some(value)
    }

    /// Renders 16 bytes as lowercase hex with hyphens after byte offsets 4,
    /// 6, 8, and 10, producing the canonical 8-4-4-4-12 form.
    #[must_use]
    pub fn hex_from_bytes(bytes: &[u8; UUID_LEN]) -> String {
        let hex = hex::encode(bytes);
        format!(
            "{}-{}-{}-{}-{}",
            &hex[..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..]
        )
    }

    /// Decodes hex text into 16 bytes, stripping all hyphens first. Performs
    /// no UUID-shape validation.
    pub fn bytes_from_hex(s: &str) -> Result<[u8; UUID_LEN], UuidError> {
        let stripped = s.replace('-', "");
        to_array(&hex::decode(stripped)?)
    }

    /// Returns the canonical hyphenated lowercase hex rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        Self::hex_from_bytes(&self.value)
    }

    /// Returns the standard-alphabet, padded Base64 rendering.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.value)
    }

    /// Returns the canonical 16-byte binary value.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.value
    }

    /// Consumes the UUID, returning the canonical 16-byte binary value.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; UUID_LEN] {
        self.value
    }

    /// Returns the representation this instance was constructed from.
    #[must_use]
    pub const fn initializer(&self) -> UuidInitializer {
        self.initializer
    }

    /// Renders to the requested text encoding. `TextEncoding::Hex` yields
    /// the hyphenated form; other encodings render the raw bytes directly.
    #[must_use]
    pub fn encode(&self, encoding: TextEncoding) -> String {
        match encoding {
            TextEncoding::Hex => self.to_hex(),
            TextEncoding::Base64 => self.to_base64(),
        }
    }

    /// Applies `f` to the canonical bytes, returning whatever it produces.
    ///
    /// Lets callers wrap the identifier in a domain-specific type without
    /// this crate knowing about it.
    pub fn map<T, F>(&self, f: F) -> T
    where
        F: FnOnce([u8; UUID_LEN]) -> T,
    {
        f(self.value)
    }

    /// Returns the ecosystem [`uuid::Uuid`] holding the same bytes.
    #[must_use]
    pub const fn to_uuid(&self) -> uuid::Uuid {
        uuid::Uuid::from_bytes(self.value)
    }
}

fn to_array(bytes: &[u8]) -> Result<[u8; UUID_LEN], UuidError> {
    bytes
        .try_into()
        .map_err(|_| UuidError::WrongLength {
            actual: bytes.len(),
        })
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

// Equality, ordering, and hashing ignore the initializer tag.

impl PartialEq for Uuid {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Uuid {}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Uuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; UUID_LEN]> for Uuid {
    fn from(value: [u8; UUID_LEN]) -> Self {
        Self::from_bytes(value)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = UuidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(u: uuid::Uuid) -> Self {
        Self::from_bytes(u.into_bytes())
    }
}

impl From<Uuid> for uuid::Uuid {
    fn from(u: Uuid) -> Self {
        uuid::Uuid::from_bytes(u.value)
    }
}

impl Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
