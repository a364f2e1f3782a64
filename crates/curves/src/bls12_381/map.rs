//! Deterministic try-and-increment map-to-curve for G1 and G2.
//!
//! Given a field element t, probe x = t, t+1, t+2, ... until x^3 + b is a
//! square, take its root y, and orient y so that sgn0(y) = sgn0(t). The
//! result lies on the curve but not necessarily in the r-torsion; callers
//! clear the cofactor to land in the subgroup.

use super::constants::B;
use super::fp::Fp;
use super::fp2::Fp2;
use super::g1::G1;
use super::g2::{B_TWIST, G2};

/// Upper bound on x-candidates probed; about half of all field elements
/// are squares, so the loop terminates long before this.
const MAX_PROBES: usize = 256;

/// Maps an Fp element onto E(Fp). Cofactor clearing is the caller's job.
pub fn map_to_g1(t: &Fp) -> G1 {
    let b = Fp::from_u64(B);
    let mut x = t.clone();
    for _ in 0..MAX_PROBES {
        let rhs = x.square().mul(&x).add(&b);
        if let Some(mut y) = rhs.sqrt() {
            if y.sgn0() != t.sgn0() {
                y = y.neg();
            }
            return G1::from_affine(x, y);
        }
        x = x.add(&Fp::one());
    }
    G1::infinity()
}

/// Maps an Fp2 element onto the twist E'(Fp2). Cofactor clearing is the
/// caller's job.
pub fn map_to_g2(t: &Fp2) -> G2 {
    let mut x = t.clone();
    for _ in 0..MAX_PROBES {
        let rhs = x.square().mul(&x).add(&B_TWIST);
        if let Some(mut y) = rhs.sqrt() {
            if y.sgn0() != t.sgn0() {
                y = y.neg();
            }
            return G2::from_affine(x, y);
        }
        x = x.add(&Fp2::one());
    }
    G2::infinity()
}
