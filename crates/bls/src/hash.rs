//! Hashing messages onto G2.
//!
//! Each Fp coordinate is expanded from (DST, coordinate index, message) by
//! two SHA-256 invocations concatenated to 64 bytes and reduced mod p.
//! Four coordinates build u0, u1 in Fp2; both map through the
//! try-and-increment map, the sum is cofactor-cleared once.

use curves::bls12_381::{map_to_g2, Fp, Fp2, G2};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Domain separation tag for consensus-layer signatures.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_SHA256_TAI_NUL_";

/// Expands (message, dst, index) to one Fp element: two chained SHA-256
/// blocks, concatenated and reduced mod p.
pub fn hash_to_field(message: &[u8], dst: &[u8], index: u64) -> Fp {
    let block = |counter: u8| -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(dst);
        hasher.update(index.to_be_bytes());
        hasher.update([counter]);
        hasher.update(message);
        hasher.finalize().into()
    };
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&block(0));
    wide[32..].copy_from_slice(&block(1));
    Fp::new(BigUint::from_bytes_be(&wide))
}

/// Hash-to-G2: two Fp2 elements, two maps, one addition, one cofactor
/// clear. The result always lies in the r-torsion subgroup.
pub fn hash_to_g2(message: &[u8], dst: &[u8]) -> G2 {
    let u0 = Fp2::new(
        hash_to_field(message, dst, 0),
        hash_to_field(message, dst, 1),
    );
    let u1 = Fp2::new(
        hash_to_field(message, dst, 2),
        hash_to_field(message, dst, 3),
    );
    let q0 = map_to_g2(&u0);
    let q1 = map_to_g2(&u1);
    q0.add(&q1).clear_cofactor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        let a = hash_to_g2(b"message", DST);
        let b = hash_to_g2(b"message", DST);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_messages_hash_to_distinct_points() {
        let a = hash_to_g2(b"message-1", DST);
        let b = hash_to_g2(b"message-2", DST);
        assert_ne!(a, b);
    }

    #[test]
    fn the_dst_separates_domains() {
        let a = hash_to_g2(b"message", b"domain-a");
        let b = hash_to_g2(b"message", b"domain-b");
        assert_ne!(a, b);
    }

    #[test]
    fn output_is_in_the_subgroup() {
        let p = hash_to_g2(b"subgroup check", DST);
        assert!(p.in_subgroup());
        assert!(!p.is_infinity());
    }

    #[test]
    fn field_expansion_differs_per_index() {
        assert_ne!(
            hash_to_field(b"m", DST, 0),
            hash_to_field(b"m", DST, 1)
        );
    }
}
