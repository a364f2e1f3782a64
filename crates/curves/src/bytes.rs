//! Fixed-width big-endian integer codecs shared by both curve families.

use num_bigint::BigUint;

/// Serializes `n` as exactly `len` big-endian bytes, left-padded with zeros.
///
/// Panics if `n` does not fit, which for callers in this workspace means a
/// reduced field element was wider than its modulus.
pub fn to_be_bytes(n: &BigUint, len: usize) -> Vec<u8> {
    let raw = n.to_bytes_be();
    assert!(raw.len() <= len, "integer wider than {len} bytes");
    let mut out = vec![0u8; len];
    out[len - raw.len()..].copy_from_slice(&raw);
    out
}

/// Reads a big-endian unsigned integer of any width.
pub fn from_be_bytes(buf: &[u8]) -> BigUint {
    BigUint::from_bytes_be(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_with_padding() {
        let n = BigUint::from(0xdeadbeefu64);
        let bytes = to_be_bytes(&n, 32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes[..28].iter().all(|b| *b == 0));
        assert_eq!(from_be_bytes(&bytes), n);
    }

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(to_be_bytes(&BigUint::from(0u8), 48), vec![0u8; 48]);
    }
}
