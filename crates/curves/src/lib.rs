//! From-scratch implementations of the two pairing-friendly curves an
//! Ethereum-compatible node needs: BN254 (alt_bn128, the EIP-196/EIP-197
//! precompile curve) and BLS12-381 (the consensus-layer and EIP-2537 curve).
//!
//! Everything is plain arbitrary-precision arithmetic over [`num_bigint`]:
//! the extension towers Fp -> Fp2 -> Fp6 -> Fp12, Jacobian point arithmetic
//! on G1 and on the sextic twist, try-and-increment map-to-curve, and the
//! optimal-ate pairing with its two-stage final exponentiation. Field
//! elements and points are immutable values; no operation mutates its
//! inputs.
//!
//! This crate deliberately trades speed for auditability. Constant-time
//! execution and hand-optimized limb arithmetic are non-goals.

pub mod bls12_381;
pub mod bn254;
mod bytes;

pub use bytes::{from_be_bytes, to_be_bytes};
