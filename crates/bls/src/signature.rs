//! Signing, verification and aggregation.

use crate::hash::{hash_to_g2, DST};
use crate::keys::{PublicKey, SecretKey};
use curves::bls12_381::compress::{g2_from_compressed, g2_to_compressed, G2_COMPRESSED};
use curves::bls12_381::{multi_pairing, G1, G2};

/// A signature: a G2 point in the r-torsion subgroup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub(crate) G2);

impl Signature {
    pub fn as_point(&self) -> &G2 {
        &self.0
    }

    /// 96-byte compressed encoding.
    pub fn to_compressed(&self) -> [u8; G2_COMPRESSED] {
        g2_to_compressed(&self.0)
    }

    /// Decodes and subgroup-checks a compressed signature.
    pub fn from_compressed(bytes: &[u8; G2_COMPRESSED]) -> Option<Self> {
        g2_from_compressed(bytes).map(Signature)
    }
}

/// sigma = [sk] H(m).
pub fn sign(secret_key: &SecretKey, message: &[u8]) -> Signature {
    Signature(hash_to_g2(message, DST).scalar_mul(secret_key.scalar()))
}

/// e(pk, H(m)) * e(-G1, sigma) = 1.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    if public_key.0.is_infinity() || signature.0.is_infinity() {
        return false;
    }
    multi_pairing(&[
        (public_key.0.clone(), hash_to_g2(message, DST)),
        (G1::generator().neg(), signature.0.clone()),
    ])
}

/// Sums signatures in G2. Returns `None` for an empty slice.
pub fn aggregate_signatures(signatures: &[Signature]) -> Option<Signature> {
    if signatures.is_empty() {
        return None;
    }
    Some(Signature(
        signatures
            .iter()
            .fold(G2::infinity(), |acc, sig| acc.add(&sig.0)),
    ))
}

/// Sums public keys in G1. Returns `None` for an empty slice.
pub fn aggregate_public_keys(public_keys: &[PublicKey]) -> Option<PublicKey> {
    if public_keys.is_empty() {
        return None;
    }
    Some(PublicKey(
        public_keys
            .iter()
            .fold(G1::infinity(), |acc, pk| acc.add(&pk.0)),
    ))
}

/// Aggregate verification with distinct messages:
/// prod e(pk_i, H(m_i)) * e(-G1, sigma) = 1.
pub fn aggregate_verify(
    public_keys: &[PublicKey],
    messages: &[&[u8]],
    signature: &Signature,
) -> bool {
    if public_keys.is_empty() || public_keys.len() != messages.len() {
        return false;
    }
    if public_keys.iter().any(|pk| pk.0.is_infinity()) {
        return false;
    }
    let mut pairs: Vec<(G1, G2)> = public_keys
        .iter()
        .zip(messages)
        .map(|(pk, m)| (pk.0.clone(), hash_to_g2(m, DST)))
        .collect();
    pairs.push((G1::generator().neg(), signature.0.clone()));
    multi_pairing(&pairs)
}

/// Aggregate verification with one common message:
/// e(sum pk_i, H(m)) * e(-G1, sigma) = 1.
pub fn fast_aggregate_verify(
    public_keys: &[PublicKey],
    message: &[u8],
    signature: &Signature,
) -> bool {
    let Some(aggregate) = aggregate_public_keys(public_keys) else {
        return false;
    };
    verify(&aggregate, message, signature)
}
