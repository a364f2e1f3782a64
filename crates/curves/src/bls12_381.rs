//! BLS12-381, the consensus-layer and EIP-2537 curve.
//!
//! y^2 = x^3 + 4 over Fp, with G2 on the sextic twist y^2 = x^3 + 4(1+u)
//! over Fp2. The tower is Fp2 = Fp[u]/(u^2+1), Fp6 = Fp2[v]/(v^3-xi) with
//! xi = 1+u, Fp12 = Fp6[w]/(w^2-v). The BLS parameter x is negative, so the
//! Miller accumulator is conjugated after the loop.

pub mod compress;
pub mod constants;
pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
pub mod g1;
pub mod g2;
pub mod map;
pub mod pairing;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::G1;
pub use g2::G2;
pub use map::{map_to_g1, map_to_g2};
pub use pairing::{miller_loop, multi_pairing, pairing};
