//! Shielded-pool error type.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShieldedError {
    /// A persisted proof did not decode to the canonical layout.
    #[error("malformed proof encoding")]
    MalformedProof,
    /// A note with the same commitment is already pooled.
    #[error("commitment already present in the pool")]
    DuplicateCommitment,
    /// The commitment tree is at capacity.
    #[error("commitment tree is full")]
    TreeFull,
}
