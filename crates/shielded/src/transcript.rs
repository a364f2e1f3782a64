//! SHA-256 Fiat-Shamir transcript.
//!
//! Every absorb is prefixed with a label and a length so the byte schedule
//! is unambiguous; prover and verifier replay the exact same sequence.
//! Challenge derivation clones the running state, so deriving a challenge
//! does not consume the transcript.

use curves::bn254::constants::ORDER;
use curves::bn254::G1;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

pub struct Transcript {
    hasher: Sha256,
    counter: u64,
}

impl Transcript {
    /// Starts a transcript under a protocol label.
    pub fn new(label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"shielded.transcript.v1");
        hasher.update(label.as_bytes());
        Transcript { hasher, counter: 0 }
    }

    /// Absorbs a labeled, length-delimited byte string.
    pub fn append_bytes(&mut self, label: &str, bytes: &[u8]) {
        self.hasher.update(b"item:");
        self.hasher.update(label.as_bytes());
        self.hasher.update(b":len:");
        self.hasher.update((bytes.len() as u64).to_be_bytes());
        self.hasher.update(b":data:");
        self.hasher.update(bytes);
    }

    /// Absorbs a scalar as 32 big-endian bytes.
    pub fn append_scalar(&mut self, label: &str, scalar: &BigUint) {
        self.append_bytes(label, &curves::to_be_bytes(&(scalar % &*ORDER), 32));
    }

    /// Absorbs a G1 point in its 64-byte affine encoding.
    pub fn append_point(&mut self, label: &str, point: &G1) {
        let (x, y) = point.to_affine();
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&x.to_be_bytes());
        bytes[32..].copy_from_slice(&y.to_be_bytes());
        self.append_bytes(label, &bytes);
    }

    /// Derives a challenge scalar mod the BN254 group order. The absorb
    /// state is untouched; only the derivation counter advances.
    pub fn challenge_scalar(&mut self, label: &str) -> BigUint {
        let digest = self.challenge_digest(label);
        BigUint::from_bytes_be(&digest) % &*ORDER
    }

    /// Derives a raw 32-byte challenge.
    pub fn challenge_digest(&mut self, label: &str) -> [u8; 32] {
        let mut fork = self.hasher.clone();
        fork.update(b"challenge:");
        fork.update(label.as_bytes());
        fork.update(b":ctr:");
        fork.update(self.counter.to_be_bytes());
        self.counter = self.counter.wrapping_add(1);
        fork.finalize().into()
    }

    /// The digest of everything absorbed so far; usable as a binding value.
    pub fn digest(&self) -> [u8; 32] {
        self.hasher.clone().finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_schedule_same_challenge() {
        let mut a = Transcript::new("test");
        let mut b = Transcript::new("test");
        a.append_bytes("data", b"payload");
        b.append_bytes("data", b"payload");
        assert_eq!(a.challenge_scalar("c"), b.challenge_scalar("c"));
    }

    #[test]
    fn labels_matter() {
        let mut a = Transcript::new("test");
        let mut b = Transcript::new("test");
        a.append_bytes("data", b"payload");
        b.append_bytes("DATA", b"payload");
        assert_ne!(a.challenge_scalar("c"), b.challenge_scalar("c"));
    }

    #[test]
    fn challenges_advance_without_consuming_the_absorb_state() {
        let mut t = Transcript::new("test");
        t.append_bytes("data", b"payload");
        let c1 = t.challenge_scalar("c");
        let c2 = t.challenge_scalar("c");
        assert_ne!(c1, c2);

        // the absorb schedule is still the deterministic one
        let mut fresh = Transcript::new("test");
        fresh.append_bytes("data", b"payload");
        assert_eq!(fresh.challenge_scalar("c"), c1);
    }

    #[test]
    fn point_absorbs_are_canonical() {
        let mut a = Transcript::new("test");
        let mut b = Transcript::new("test");
        a.append_point("p", &G1::generator());
        b.append_point("p", &G1::generator().double());
        assert_ne!(a.digest(), b.digest());
    }
}
