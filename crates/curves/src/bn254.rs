//! BN254 (alt_bn128), the curve behind the EIP-196/EIP-197 precompiles.
//!
//! y^2 = x^3 + 3 over Fp, with G2 on the sextic twist y^2 = x^3 + 3/(9+i)
//! over Fp2. The tower is Fp2 = Fp[i]/(i^2+1), Fp6 = Fp2[v]/(v^3-xi) with
//! xi = 9+i, Fp12 = Fp6[w]/(w^2-v).

pub mod constants;
pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
pub mod g1;
pub mod g2;
pub mod pairing;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::G1;
pub use g2::G2;
pub use pairing::{miller_loop, multi_pairing, pairing};
