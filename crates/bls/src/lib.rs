//! Aggregate BLS signatures over BLS12-381.
//!
//! Public keys live in G1 (48-byte compressed), signatures in G2 (96-byte
//! compressed); messages are hashed onto G2. Verification uses the product
//! form e(pk, H(m)) * e(-G1, sigma) = 1 so a single multi-pairing decides
//! each equation.
//!
//! Aggregation is linear: signatures add in G2, public keys add in G1.
//! `aggregate_verify` handles distinct messages, `fast_aggregate_verify`
//! the one-message / many-signers case that proof-of-possession
//! deployments use.

mod hash;
mod keys;
pub mod registry;
mod signature;

pub use hash::{hash_to_field, hash_to_g2, DST};
pub use keys::{PublicKey, SecretKey};
pub use signature::{
    aggregate_public_keys, aggregate_signatures, aggregate_verify, fast_aggregate_verify, sign,
    verify, Signature,
};
