//! Pedersen-commitment shielded transfers on BN254 G1.
//!
//! A note commits to an amount with C = [amount]G + [r]H for independent
//! generators G and H; spending reveals a nullifier whose uniqueness the
//! [`NullifierSet`] enforces. Amount validity is argued with a
//! bit-decomposition range proof under a SHA-256 Fiat-Shamir transcript,
//! and a transfer binds nullifier, output commitment, Merkle root and
//! range proof through one transcript digest.
//!
//! None of this is a succinct argument; verification is the structural
//! replay of the Fiat-Shamir chain.

mod error;
pub mod nullifier;
pub mod pedersen;
pub mod range_proof;
pub mod transcript;
pub mod transfer;
pub mod tree;

pub use error::ShieldedError;
pub use nullifier::{derive_nullifier, NullifierSet, NULLIFIER_DOMAIN};
pub use pedersen::{commit, commitment_value, pedersen_h, PedersenCommitment};
pub use range_proof::{RangeProof, RANGE_BITS};
pub use transcript::Transcript;
pub use transfer::{NullifierProof, ShieldedCircuitProof, TransferProof};
pub use tree::{CommitmentTree, Note, ShieldedNotePool, TREE_DEPTH};
