/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_URL_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Code point of the lowest character in the alphabet (`-`).
pub const BASE: u8 = b'-';

/// Marker for reverse-index slots that do not belong to the alphabet.
pub const INVALID: i8 = -1;

/// Reverse index over the alphabet: `ALPHABET_URL_IDX[code - BASE]` is the
/// 6-bit value of the character with that code point, or [`INVALID`].
/// The 78 slots span `-` (45) through `z` (122).
pub const ALPHABET_URL_IDX: [i8; 78] = {
    let mut table = [INVALID; 78];
    let mut i = 0;
    while i < 64 {
        table[(ALPHABET_URL_BYTES[i] - BASE) as usize] = i as i8;
        i += 1;
    }
    table
};
