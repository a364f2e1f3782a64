//! Pedersen commitments on BN254 G1.
//!
//! G is the standard generator; H = [h]G for h = SHA-256 of a fixed domain
//! string reduced mod the group order, so nobody knows log_G(H) short of
//! breaking the hash. C(amount, r) = [amount]G + [r]H is hiding in r and
//! binding under the discrete log assumption.

use curves::bn254::constants::ORDER;
use curves::bn254::G1;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

const H_DOMAIN: &[u8] = b"shielded-pedersen-H-generator-bn254";

static PEDERSEN_H: Lazy<G1> = Lazy::new(|| {
    let digest = Sha256::digest(H_DOMAIN);
    let h = BigUint::from_bytes_be(&digest) % &*ORDER;
    G1::generator().scalar_mul(&h)
});

/// The second Pedersen generator H.
pub fn pedersen_h() -> G1 {
    PEDERSEN_H.clone()
}

/// A commitment: the curve point and its 32-byte commitment value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PedersenCommitment {
    pub point: G1,
    /// Keccak-256 of the 64-byte affine encoding of `point`.
    pub value: [u8; 32],
}

/// The 64-byte affine encoding hashed into the commitment value.
pub fn point_bytes(point: &G1) -> [u8; 64] {
    let (x, y) = point.to_affine();
    let mut out = [0u8; 64];
    out[..32].copy_from_slice(&x.to_be_bytes());
    out[32..].copy_from_slice(&y.to_be_bytes());
    out
}

/// Keccak-256 of the affine encoding; the note-facing commitment value.
pub fn commitment_value(point: &G1) -> [u8; 32] {
    Keccak256::digest(point_bytes(point)).into()
}

/// C(amount, r) = [amount]G + [r]H.
pub fn commit(amount: u64, blinding: &BigUint) -> PedersenCommitment {
    let point = G1::generator()
        .scalar_mul(&BigUint::from(amount))
        .add(&PEDERSEN_H.scalar_mul(blinding));
    let value = commitment_value(&point);
    PedersenCommitment { point, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_differs_from_g_and_is_in_the_group() {
        let h = pedersen_h();
        assert_ne!(h, G1::generator());
        assert!(h.in_subgroup());
        assert!(!h.is_infinity());
    }

    #[test]
    fn commitments_are_deterministic_and_hiding_in_r() {
        let r1 = BigUint::from(1234u32);
        let r2 = BigUint::from(5678u32);
        assert_eq!(commit(10, &r1), commit(10, &r1));
        assert_ne!(commit(10, &r1).point, commit(10, &r2).point);
        assert_ne!(commit(10, &r1).point, commit(11, &r1).point);
    }

    #[test]
    fn commitments_are_additively_homomorphic() {
        let r1 = BigUint::from(1111u32);
        let r2 = BigUint::from(2222u32);
        let sum = commit(10, &r1).point.add(&commit(32, &r2).point);
        assert_eq!(sum, commit(42, &(&r1 + &r2)).point);
    }

    #[test]
    fn the_commitment_value_tracks_the_point() {
        let c = commit(5, &BigUint::from(99u8));
        assert_eq!(c.value, commitment_value(&c.point));
        assert_ne!(c.value, commitment_value(&G1::generator()));
    }
}
