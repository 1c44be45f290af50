//! Tests for URL-safe base64 encoding (to_base64_url).

use base64url::to_base64_url;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64_url(&blob);

        // Verify it's URL-safe (no +, /, or =)
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));

        let expected = base64url_encode(&blob);
        assert_eq!(
            encoded,
            expected,
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn length_formula() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64_url(&blob);
        let expected_length = blob.len() / 3 * 4 + [0, 2, 3][blob.len() % 3];
        assert_eq!(
            encoded.len(),
            expected_length,
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base64_url(b""), "");
}

#[test]
fn single_byte() {
    assert_eq!(to_base64_url(b"f"), "Zg");
}

#[test]
fn two_bytes() {
    assert_eq!(to_base64_url(b"fo"), "Zm8");
}

#[test]
fn three_bytes() {
    assert_eq!(to_base64_url(b"foo"), "Zm9v");
}

#[test]
fn known_vectors() {
    assert_eq!(to_base64_url(&[0x00]), "AA");
    assert_eq!(to_base64_url(b"fo"), "Zm8");
    assert_eq!(to_base64_url(b"foo"), "Zm9v");
    assert_eq!(to_base64_url(b"Ma"), "TWE");
}

/// Simple base64url encoding for test verification
fn base64url_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    let mut result = String::new();
    let mut i = 0;

    while i < data.len() {
        let chunk = &data[i..std::cmp::min(i + 3, data.len())];
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(ALPHABET[(b0 >> 2) as usize] as char);
        result.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        }
        if chunk.len() > 2 {
            result.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        }

        i += 3;
    }

    result
}
