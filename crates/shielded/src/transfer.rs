//! Transfer proofs: the binding layer over nullifier, commitment, tree
//! root and range proof, and the canonical persisted form.

use crate::error::ShieldedError;
use crate::nullifier::derive_nullifier;
use crate::pedersen::{commit, PedersenCommitment};
use crate::range_proof::{RangeProof, RANGE_BITS};
use crate::transcript::Transcript;
use curves::bn254::G1;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

const KEY_IMAGE_DOMAIN: &[u8] = b"shielded-key-image-v1";
const DERIVATION_DOMAIN: &[u8] = b"shielded-nullifier-derivation-v1";
const BINDING_LABEL: &str = "shielded-transfer-v1";

/// Proof that a nullifier was derived from a spending key and note index.
/// The key itself never leaves the prover; `verify` is the prover-side
/// re-derivation, `is_well_formed` the verifier-side structural check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NullifierProof {
    pub nullifier: [u8; 32],
    pub index: u64,
    /// SHA-256 commitment to the spending key.
    pub key_image: [u8; 32],
    /// SHA-256 over (domain, sk, index, nullifier).
    pub binding: [u8; 32],
}

impl NullifierProof {
    pub fn create(spending_key: &[u8], index: u64) -> NullifierProof {
        let nullifier = derive_nullifier(spending_key, index);
        let key_image = {
            let mut hasher = Sha256::new();
            hasher.update(KEY_IMAGE_DOMAIN);
            hasher.update(spending_key);
            hasher.finalize().into()
        };
        let binding = Self::binding_hash(spending_key, index, &nullifier);
        NullifierProof {
            nullifier,
            index,
            key_image,
            binding,
        }
    }

    fn binding_hash(spending_key: &[u8], index: u64, nullifier: &[u8; 32]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(DERIVATION_DOMAIN);
        hasher.update(spending_key);
        hasher.update(index.to_be_bytes());
        hasher.update(nullifier);
        hasher.finalize().into()
    }

    /// Full re-derivation with the spending key in hand.
    pub fn verify(&self, spending_key: &[u8]) -> bool {
        self.nullifier == derive_nullifier(spending_key, self.index)
            && self.binding == Self::binding_hash(spending_key, self.index, &self.nullifier)
    }

    /// Structural check available to verifiers without the key: the
    /// nullifier and binding must be non-trivial and distinct.
    pub fn is_well_formed(&self) -> bool {
        self.nullifier != [0u8; 32]
            && self.key_image != [0u8; 32]
            && self.binding != [0u8; 32]
            && self.binding != self.nullifier
    }
}

/// A shielded transfer proof. Binds everything a verifier sees through a
/// single transcript digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferProof {
    pub nullifier_proof: NullifierProof,
    /// 32-byte commitment value of the output note.
    pub output_commitment: [u8; 32],
    /// Commitment-tree root the spent note claims membership in.
    pub merkle_root: [u8; 32],
    pub range_proof: RangeProof,
    /// Transcript digest over all of the above.
    pub binding: [u8; 32],
}

fn transfer_binding(
    nullifier: &[u8; 32],
    output_commitment: &[u8; 32],
    merkle_root: &[u8; 32],
    range_proof: &RangeProof,
) -> [u8; 32] {
    let mut transcript = Transcript::new(BINDING_LABEL);
    transcript.append_bytes("nullifier", nullifier);
    transcript.append_bytes("output-commitment", output_commitment);
    transcript.append_bytes("merkle-root", merkle_root);
    transcript.append_bytes("range-proof", &range_proof.digest());
    transcript.digest()
}

impl TransferProof {
    /// Builds the proof for spending the note at `index` into a fresh
    /// output commitment of `amount` under `blinding`. Returns the proof
    /// together with the output commitment.
    pub fn create(
        spending_key: &[u8],
        index: u64,
        amount: u64,
        blinding: &BigUint,
        merkle_root: [u8; 32],
    ) -> (TransferProof, PedersenCommitment) {
        let nullifier_proof = NullifierProof::create(spending_key, index);
        let output = commit(amount, blinding);
        let range_proof = RangeProof::prove(amount, blinding);
        let binding = transfer_binding(
            &nullifier_proof.nullifier,
            &output.value,
            &merkle_root,
            &range_proof,
        );
        (
            TransferProof {
                nullifier_proof,
                output_commitment: output.value,
                merkle_root,
                range_proof,
                binding,
            },
            output,
        )
    }

    /// The structural-check verification: nullifier proof well-formed,
    /// range proof chain replays against the output commitment point, and
    /// the binding digest recomputes.
    pub fn verify(&self, output_point: &G1) -> bool {
        if !self.nullifier_proof.is_well_formed() {
            return false;
        }
        if !self.range_proof.verify(output_point) {
            return false;
        }
        let expected = transfer_binding(
            &self.nullifier_proof.nullifier,
            &self.output_commitment,
            &self.merkle_root,
            &self.range_proof,
        );
        self.binding == expected
    }
}

/// The canonical persisted form of a transfer proof: a fixed-layout byte
/// string that round-trips exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShieldedCircuitProof {
    pub bytes: Vec<u8>,
}

const CIRCUIT_PROOF_VERSION: u8 = 1;
const CIRCUIT_PROOF_LEN: usize = 1 + 32 + 8 + 32 + 32 + 32 + 32 + 32 + RANGE_BITS * (64 + 32 + 32);

impl ShieldedCircuitProof {
    /// Serializes a transfer proof into the persisted layout.
    pub fn from_proof(proof: &TransferProof) -> ShieldedCircuitProof {
        let mut bytes = Vec::with_capacity(CIRCUIT_PROOF_LEN);
        bytes.push(CIRCUIT_PROOF_VERSION);
        bytes.extend_from_slice(&proof.nullifier_proof.nullifier);
        bytes.extend_from_slice(&proof.nullifier_proof.index.to_be_bytes());
        bytes.extend_from_slice(&proof.nullifier_proof.key_image);
        bytes.extend_from_slice(&proof.nullifier_proof.binding);
        bytes.extend_from_slice(&proof.output_commitment);
        bytes.extend_from_slice(&proof.merkle_root);
        bytes.extend_from_slice(&proof.binding);
        for i in 0..RANGE_BITS {
            bytes.extend_from_slice(&proof.range_proof.bit_commitments[i]);
            bytes.extend_from_slice(&proof.range_proof.challenges[i]);
            bytes.extend_from_slice(&proof.range_proof.responses[i]);
        }
        debug_assert_eq!(bytes.len(), CIRCUIT_PROOF_LEN);
        ShieldedCircuitProof { bytes }
    }

    /// Parses the persisted layout back into a transfer proof.
    pub fn to_proof(&self) -> Result<TransferProof, ShieldedError> {
        let b = &self.bytes;
        if b.len() != CIRCUIT_PROOF_LEN || b[0] != CIRCUIT_PROOF_VERSION {
            return Err(ShieldedError::MalformedProof);
        }
        let arr32 = |offset: usize| -> [u8; 32] {
            b[offset..offset + 32].try_into().expect("fixed width")
        };
        let nullifier = arr32(1);
        let index = u64::from_be_bytes(b[33..41].try_into().expect("fixed width"));
        let key_image = arr32(41);
        let nullifier_binding = arr32(73);
        let output_commitment = arr32(105);
        let merkle_root = arr32(137);
        let binding = arr32(169);

        let mut bit_commitments = Vec::with_capacity(RANGE_BITS);
        let mut challenges = Vec::with_capacity(RANGE_BITS);
        let mut responses = Vec::with_capacity(RANGE_BITS);
        let mut offset = 201;
        for _ in 0..RANGE_BITS {
            bit_commitments.push(
                b[offset..offset + 64]
                    .try_into()
                    .map_err(|_| ShieldedError::MalformedProof)?,
            );
            offset += 64;
            challenges.push(arr32(offset));
            offset += 32;
            responses.push(arr32(offset));
            offset += 32;
        }

        Ok(TransferProof {
            nullifier_proof: NullifierProof {
                nullifier,
                index,
                key_image,
                binding: nullifier_binding,
            },
            output_commitment,
            merkle_root,
            range_proof: RangeProof {
                bit_commitments,
                challenges,
                responses,
            },
            binding,
        })
    }
}
