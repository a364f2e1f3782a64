//! G1: Jacobian arithmetic on y^2 = x^3 + 3 over Fp.

use super::constants::{B, ORDER};
use super::fp::Fp;
use num_bigint::BigUint;

/// A G1 point in Jacobian coordinates; Z = 0 encodes infinity.
#[derive(Clone, Debug)]
pub struct G1 {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

impl G1 {
    /// The point at infinity.
    pub fn infinity() -> Self {
        G1 {
            x: Fp::zero(),
            y: Fp::zero(),
            z: Fp::zero(),
        }
    }

    /// The standard generator (1, 2).
    pub fn generator() -> Self {
        G1::from_affine(Fp::one(), Fp::from_u64(2))
    }

    /// Builds a point from affine coordinates; (0, 0) is infinity.
    pub fn from_affine(x: Fp, y: Fp) -> Self {
        if x.is_zero() && y.is_zero() {
            return G1::infinity();
        }
        G1 {
            x,
            y,
            z: Fp::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Normalizes to affine coordinates; infinity maps to (0, 0).
    pub fn to_affine(&self) -> (Fp, Fp) {
        if self.is_infinity() {
            return (Fp::zero(), Fp::zero());
        }
        let z_inv = self.z.invert();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        (self.x.mul(&z_inv2), self.y.mul(&z_inv3))
    }

    /// Affine curve-equation check: y^2 = x^3 + b.
    pub fn is_on_curve(x: &Fp, y: &Fp) -> bool {
        if x.is_zero() && y.is_zero() {
            return true;
        }
        let lhs = y.square();
        let rhs = x.square().mul(x).add(&Fp::from_u64(B));
        lhs == rhs
    }

    pub fn neg(&self) -> G1 {
        if self.is_infinity() {
            return G1::infinity();
        }
        G1 {
            x: self.x.clone(),
            y: self.y.neg(),
            z: self.z.clone(),
        }
    }

    /// Doubling with a = 0 (dbl-2009-l).
    pub fn double(&self) -> G1 {
        if self.is_infinity() {
            return G1::infinity();
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = self.x.add(&b).square().sub(&a).sub(&c).double();
        let e = a.double().add(&a);
        let f = e.square();

        let x3 = f.sub(&d.double());
        let y3 = e.mul(&d.sub(&x3)).sub(&c.double().double().double());
        let z3 = self.y.mul(&self.z).double();
        G1 {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Strongly-unified Jacobian addition (add-2007-bl with tie-breaks).
    pub fn add(&self, rhs: &G1) -> G1 {
        if self.is_infinity() {
            return rhs.clone();
        }
        if rhs.is_infinity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = rhs.x.mul(&z1z1);
        let s1 = self.y.mul(&z2z2).mul(&rhs.z);
        let s2 = rhs.y.mul(&z1z1).mul(&self.z);

        if u1 == u2 {
            if s1 == s2 {
                return self.double();
            }
            return G1::infinity();
        }

        let h = u2.sub(&u1);
        let i = h.double().square();
        let j = h.mul(&i);
        let r = s2.sub(&s1).double();
        let v = u1.mul(&i);

        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&j).double());
        let z3 = self
            .z
            .add(&rhs.z)
            .square()
            .sub(&z1z1)
            .sub(&z2z2)
            .mul(&h);
        G1 {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Binary MSB-first ladder without scalar reduction. Kept internal:
    /// cofactor clearing and subgroup checks need the unreduced scalar.
    fn ladder(&self, k: &BigUint) -> G1 {
        let mut acc = G1::infinity();
        if k.bits() == 0 {
            return acc;
        }
        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Scalar multiplication; the scalar is reduced mod the group order
    /// before iteration, so k * O = O and 0 * P = O hold by construction.
    pub fn scalar_mul(&self, k: &BigUint) -> G1 {
        if self.is_infinity() {
            return G1::infinity();
        }
        self.ladder(&(k % &*ORDER))
    }

    /// The definitional subgroup test [r]P = O.
    pub fn in_subgroup(&self) -> bool {
        self.ladder(&ORDER).is_infinity()
    }

    /// Naive multi-scalar multiplication.
    pub fn msm(pairs: &[(G1, BigUint)]) -> G1 {
        pairs
            .iter()
            .fold(G1::infinity(), |acc, (p, k)| acc.add(&p.scalar_mul(k)))
    }
}

impl PartialEq for G1 {
    fn eq(&self, other: &Self) -> bool {
        self.to_affine() == other.to_affine()
    }
}

impl Eq for G1 {}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use rand::Rng;

    fn random_scalar(rng: &mut impl Rng) -> BigUint {
        let mut buf = [0u8; 32];
        rng.fill(&mut buf[..]);
        BigUint::from_bytes_be(&buf)
    }

    #[test]
    fn generator_is_on_curve_and_in_subgroup() {
        let g = G1::generator();
        let (x, y) = g.to_affine();
        assert!(G1::is_on_curve(&x, &y));
        assert!(g.in_subgroup());
        assert!(G1::infinity().in_subgroup());
    }

    #[test]
    fn group_law_axioms() {
        let mut rng = rand::thread_rng();
        let g = G1::generator();
        let p = g.scalar_mul(&random_scalar(&mut rng));
        let q = g.scalar_mul(&random_scalar(&mut rng));
        let r = g.scalar_mul(&random_scalar(&mut rng));

        assert_eq!(p.add(&q), q.add(&p));
        assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
        assert_eq!(p.add(&p.neg()), G1::infinity());
        assert_eq!(p.add(&G1::infinity()), p);
        assert_eq!(p.double(), p.add(&p));
    }

    #[test]
    fn scalar_mul_edge_cases() {
        let g = G1::generator();
        assert_eq!(g.scalar_mul(&BigUint::zero()), G1::infinity());
        assert_eq!(
            G1::infinity().scalar_mul(&BigUint::from(5u8)),
            G1::infinity()
        );
        assert_eq!(g.scalar_mul(&ORDER), G1::infinity());
        assert_eq!(g.scalar_mul(&BigUint::from(1u8)), g);
    }

    #[test]
    fn scalar_mul_distributes_over_scalar_addition() {
        let mut rng = rand::thread_rng();
        let g = G1::generator();
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let lhs = g.scalar_mul(&(&a + &b));
        let rhs = g.scalar_mul(&a).add(&g.scalar_mul(&b));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn doubling_the_generator_matches_the_known_point() {
        // 2G, as fixed by the EIP-196 test vectors.
        let two_g = G1::generator().double().to_affine();
        assert_eq!(
            hex::encode(two_g.0.to_be_bytes()),
            "030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3"
        );
        assert_eq!(
            hex::encode(two_g.1.to_be_bytes()),
            "15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4"
        );
    }

    #[test]
    fn msm_matches_sum_of_products() {
        let mut rng = rand::thread_rng();
        let g = G1::generator();
        let pairs: Vec<(G1, BigUint)> = (0..4)
            .map(|_| {
                (
                    g.scalar_mul(&random_scalar(&mut rng)),
                    random_scalar(&mut rng),
                )
            })
            .collect();
        let expected = pairs
            .iter()
            .fold(G1::infinity(), |acc, (p, k)| acc.add(&p.scalar_mul(k)));
        assert_eq!(G1::msm(&pairs), expected);
    }
}
