//! URL-safe base64 encoding and decoding.
//!
//! This crate implements the "Base64url Encoding" format as specified in
//! RFC 4648 section 5 and used by JSON Web Signature (JWS) RFC 7515: the
//! URL- and filename-safe alphabet (`-` and `_` instead of `+` and `/`),
//! with trailing `=` padding omitted.
//!
//! # Example
//!
//! ```
//! use base64url::{to_base64_url, from_base64_url};
//!
//! let data = b"hello world";
//! let encoded = to_base64_url(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ");
//! let decoded = from_base64_url(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64_url;
mod to_base64_url;

pub use constants::{ALPHABET_URL, ALPHABET_URL_BYTES, ALPHABET_URL_IDX, BASE, INVALID};
pub use from_base64_url::from_base64_url;
pub use to_base64_url::to_base64_url;

use thiserror::Error;

/// Error type for base64url operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64UrlError {
    /// The input length modulo 4 is 1, which no unpadded encoding produces.
    #[error("illegal base64url string length")]
    InvalidLength,
    /// The input contains a character outside the URL-safe alphabet.
    #[error("invalid base64url character")]
    InvalidCharacter,
}
