//! # uuid-repr
//!
//! A 128-bit UUID value type normalized to a 16-byte binary value, with
//! conversions to and from hyphenated hex text and standard Base64 text.
//!
//! ## Design Principles
//!
//! - The 16-byte binary value is canonical; hex and Base64 are derived
//!   renderings
//! - Construction is tagged: callers either name the representation they
//!   hold ([`UuidSource`]) or use [`Uuid::parse`] to auto-detect it
//! - Hinted constructors trust their input and only decode; auto-detection
//!   validates against the UUID shape before accepting
//! - Instances are immutable and `Copy`; equality and ordering consider the
//!   binary value only
//!
//! ## Representations
//!
//! | Form   | Shape                                  | Example                                  |
//! |--------|----------------------------------------|------------------------------------------|
//! | Hex    | lowercase, 8-4-4-4-12 hyphen groups    | `018f5a3b-2c4d-7e6f-8a9b-0c1d2e3f4a5b`   |
//! | Base64 | standard alphabet, padded              | `AY9aOyxNfm+KmwwdLj9KWw==`               |
//! | Bytes  | exactly 16 bytes, big-endian           | `[0x01, 0x8f, ..]`                       |
//!
//! ## Example
//!
//! ```
//! use uuid_repr::Uuid;
//!
//! let id = Uuid::new(); // fresh, time-ordered (UUIDv7)
//! let same = Uuid::from_base64(&id.to_base64())?;
//! assert_eq!(id, same);
//!
//! assert!(Uuid::try_parse("not-a-uuid").is_none());
//! # Ok::<(), uuid_repr::UuidError>(())
//! ```

mod error;
mod types;
mod uuid;

pub use error::UuidError;
pub use types::{TextEncoding, UuidInitializer, UuidSource};
pub use crate::uuid::{Uuid, UUID_LEN};
