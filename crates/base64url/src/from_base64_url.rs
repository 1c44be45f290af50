//! URL-safe base64 decoding function.

use crate::constants::{ALPHABET_URL_IDX, BASE};
use crate::Base64UrlError;

/// Translates one input byte to its 6-bit value through the reverse index.
fn sextet(byte: u8) -> Result<u8, Base64UrlError> {
    if byte < BASE {
        return Err(Base64UrlError::InvalidCharacter);
    }
    let idx = (byte - BASE) as usize;
    if idx >= ALPHABET_URL_IDX.len() {
        return Err(Base64UrlError::InvalidCharacter);
    }
    let value = ALPHABET_URL_IDX[idx];
    if value < 0 {
        return Err(Base64UrlError::InvalidCharacter);
    }
    Ok(value as u8)
}

/// Decodes a URL-safe base64 string to bytes.
///
/// This expects the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// with no padding; a trailing `=` is rejected like any other character
/// outside the alphabet.
///
/// # Arguments
///
/// * `encoded` - The base64url string to decode.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is invalid.
///
/// # Errors
///
/// Returns [`Base64UrlError::InvalidLength`] when the input length modulo 4
/// is 1 (no unpadded encoding produces such a length), and
/// [`Base64UrlError::InvalidCharacter`] when the input contains a character
/// outside the alphabet.
///
/// # Example
///
/// ```
/// use base64url::from_base64_url;
///
/// let decoded = from_base64_url("aGVsbG8gd29ybGQ").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64UrlError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let length = encoded.len();
    let mod4 = length % 4;
    if mod4 == 1 {
        return Err(Base64UrlError::InvalidLength);
    }
    // Virtual characters a 4-character-group loop would skip past the input.
    let diff = if mod4 > 0 { 4 - mod4 } else { 0 };

    let encoded_bytes = encoded.as_bytes();

    // Exact output size; the buffer never grows after this.
    let buffer_length = ((length + diff) >> 2) * 3 - diff;
    let mut buf = vec![0u8; buffer_length];

    // Start of the short trailing group, if any.
    let main_length = if diff > 0 { length - (4 - diff) } else { length };

    let mut j = 0;
    let mut i = 0;
    while i < main_length {
        let sextet0 = sextet(encoded_bytes[i])?;
        let sextet1 = sextet(encoded_bytes[i + 1])?;
        let sextet2 = sextet(encoded_bytes[i + 2])?;
        let sextet3 = sextet(encoded_bytes[i + 3])?;

        buf[j] = (sextet0 << 2) | (sextet1 >> 4);
        buf[j + 1] = (sextet1 << 4) | (sextet2 >> 2);
        buf[j + 2] = (sextet2 << 6) | sextet3;
        j += 3;
        i += 4;
    }

    if diff == 2 {
        // Two real characters left, one byte of data.
        let sextet0 = sextet(encoded_bytes[main_length])?;
        let sextet1 = sextet(encoded_bytes[main_length + 1])?;

        buf[j] = (sextet0 << 2) | (sextet1 >> 4);
    } else if diff == 1 {
        // Three real characters left, two bytes of data.
        let sextet0 = sextet(encoded_bytes[main_length])?;
        let sextet1 = sextet(encoded_bytes[main_length + 1])?;
        let sextet2 = sextet(encoded_bytes[main_length + 2])?;

        buf[j] = (sextet0 << 2) | (sextet1 >> 4);
        buf[j + 1] = (sextet1 << 4) | (sextet2 >> 2);
    }

    Ok(buf)
}
