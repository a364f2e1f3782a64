//! Secret scalars and G1 public keys.

use curves::bls12_381::compress::{g1_from_compressed, g1_to_compressed, G1_COMPRESSED};
use curves::bls12_381::constants::ORDER;
use curves::bls12_381::G1;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

/// A secret key: a nonzero scalar mod r.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey(BigUint);

impl SecretKey {
    /// Samples a fresh key from the provided RNG.
    pub fn generate(rng: &mut dyn RngCore) -> Self {
        loop {
            let mut buf = [0u8; 32];
            rng.fill_bytes(&mut buf);
            let scalar = BigUint::from_bytes_be(&buf) % &*ORDER;
            if !scalar.is_zero() {
                return SecretKey(scalar);
            }
        }
    }

    /// Builds a key from 32 big-endian bytes, reduced mod r; the zero
    /// scalar is rejected.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let scalar = BigUint::from_bytes_be(bytes) % &*ORDER;
        if scalar.is_zero() {
            None
        } else {
            Some(SecretKey(scalar))
        }
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        curves::to_be_bytes(&self.0, 32).try_into().expect("fixed width")
    }

    pub(crate) fn scalar(&self) -> &BigUint {
        &self.0
    }

    /// The corresponding public key [sk]G1.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(G1::generator().scalar_mul(&self.0))
    }
}

/// A public key: a G1 point in the r-torsion subgroup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(pub(crate) G1);

impl PublicKey {
    pub fn as_point(&self) -> &G1 {
        &self.0
    }

    /// 48-byte compressed encoding.
    pub fn to_compressed(&self) -> [u8; G1_COMPRESSED] {
        g1_to_compressed(&self.0)
    }

    /// Decodes and subgroup-checks a compressed public key.
    pub fn from_compressed(bytes: &[u8; G1_COMPRESSED]) -> Option<Self> {
        g1_from_compressed(bytes).map(PublicKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_canonical_and_round_trip() {
        let mut rng = rand::thread_rng();
        let sk = SecretKey::generate(&mut rng);
        let pk = sk.public_key();

        let restored = PublicKey::from_compressed(&pk.to_compressed()).unwrap();
        assert_eq!(restored, pk);

        let sk2 = SecretKey::from_be_bytes(&sk.to_be_bytes()).unwrap();
        assert_eq!(sk2, sk);
    }

    #[test]
    fn the_zero_scalar_is_rejected() {
        assert!(SecretKey::from_be_bytes(&[0u8; 32]).is_none());
    }

    #[test]
    fn public_keys_live_in_the_subgroup() {
        let sk = SecretKey::from_be_bytes(&{
            let mut b = [0u8; 32];
            b[31] = 42;
            b
        })
        .unwrap();
        assert!(sk.public_key().as_point().in_subgroup());
    }
}
