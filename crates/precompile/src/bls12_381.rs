//! BLS12-381 precompiles added in
//! [`EIP-2537`](https://eips.ethereum.org/EIPS/eip-2537): G1/G2 add, mul
//! and MSM, the pairing check, and the two map-to-curve operations.
//!
//! Every Fp element travels as 64 bytes with the top 16 required to be
//! zero; Fp2 elements are laid out imaginary-part first (c1 || c0); the
//! all-zeros coordinate block is the point at infinity. Decoded points are
//! checked on-curve and (except infinity) in the r-torsion subgroup.

pub mod g1_add;
pub mod g1_msm;
pub mod g1_mul;
pub mod g2_add;
pub mod g2_msm;
pub mod g2_mul;
pub mod map_fp2_to_g2;
pub mod map_fp_to_g1;
pub mod pairing;
pub mod utils;
