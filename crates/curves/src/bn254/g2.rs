//! G2: Jacobian arithmetic on the sextic twist y^2 = x^3 + 3/(9+i) over Fp2.

use super::constants::{G2_GENERATOR_X, G2_GENERATOR_Y, ORDER, B};
use super::fp::Fp;
use super::fp2::Fp2;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Twist coefficient b' = b / xi.
pub static B_TWIST: Lazy<Fp2> =
    Lazy::new(|| Fp2::from_fp(Fp::from_u64(B)).mul(&Fp2::xi().invert()));

fn fp_from_dec(s: &str) -> Fp {
    Fp::new(BigUint::parse_bytes(s.as_bytes(), 10).expect("decimal literal"))
}

/// A G2 point in Jacobian coordinates over Fp2; Z = 0 encodes infinity.
#[derive(Clone, Debug)]
pub struct G2 {
    pub x: Fp2,
    pub y: Fp2,
    pub z: Fp2,
}

impl G2 {
    pub fn infinity() -> Self {
        G2 {
            x: Fp2::zero(),
            y: Fp2::zero(),
            z: Fp2::zero(),
        }
    }

    /// The standard G2 generator of the r-torsion on the twist.
    pub fn generator() -> Self {
        G2::from_affine(
            Fp2::new(fp_from_dec(G2_GENERATOR_X.0), fp_from_dec(G2_GENERATOR_X.1)),
            Fp2::new(fp_from_dec(G2_GENERATOR_Y.0), fp_from_dec(G2_GENERATOR_Y.1)),
        )
    }

    /// Builds a point from affine coordinates; (0, 0) is infinity.
    pub fn from_affine(x: Fp2, y: Fp2) -> Self {
        if x.is_zero() && y.is_zero() {
            return G2::infinity();
        }
        G2 {
            x,
            y,
            z: Fp2::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn to_affine(&self) -> (Fp2, Fp2) {
        if self.is_infinity() {
            return (Fp2::zero(), Fp2::zero());
        }
        let z_inv = self.z.invert();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        (self.x.mul(&z_inv2), self.y.mul(&z_inv3))
    }

    /// Affine twist-equation check: y^2 = x^3 + b'.
    pub fn is_on_curve(x: &Fp2, y: &Fp2) -> bool {
        if x.is_zero() && y.is_zero() {
            return true;
        }
        let lhs = y.square();
        let rhs = x.square().mul(x).add(&B_TWIST);
        lhs == rhs
    }

    pub fn neg(&self) -> G2 {
        if self.is_infinity() {
            return G2::infinity();
        }
        G2 {
            x: self.x.clone(),
            y: self.y.neg(),
            z: self.z.clone(),
        }
    }

    pub fn double(&self) -> G2 {
        if self.is_infinity() {
            return G2::infinity();
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
        G2 {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn add(&self, rhs: &G2) -> G2 {
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
            return G2::infinity();
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
        G2 {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn ladder(&self, k: &BigUint) -> G2 {
        let mut acc = G2::infinity();
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

    /// Scalar multiplication with the scalar reduced mod the group order.
    pub fn scalar_mul(&self, k: &BigUint) -> G2 {
        if self.is_infinity() {
            return G2::infinity();
        }
        self.ladder(&(k % &*ORDER))
    }

    /// The definitional subgroup test [r]P = O.
    pub fn in_subgroup(&self) -> bool {
        self.ladder(&ORDER).is_infinity()
    }

    pub fn msm(pairs: &[(G2, BigUint)]) -> G2 {
        pairs
            .iter()
            .fold(G2::infinity(), |acc, (p, k)| acc.add(&p.scalar_mul(k)))
    }
}

impl PartialEq for G2 {
    fn eq(&self, other: &Self) -> bool {
        self.to_affine() == other.to_affine()
    }
}

impl Eq for G2 {}

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
    fn generator_is_on_twist_and_in_subgroup() {
        let g = G2::generator();
        let (x, y) = g.to_affine();
        assert!(G2::is_on_curve(&x, &y));
        assert!(g.in_subgroup());
        assert!(G2::infinity().in_subgroup());
    }

    #[test]
    fn group_law_axioms() {
        let mut rng = rand::thread_rng();
        let g = G2::generator();
        let p = g.scalar_mul(&random_scalar(&mut rng));
        let q = g.scalar_mul(&random_scalar(&mut rng));

        assert_eq!(p.add(&q), q.add(&p));
        assert_eq!(p.add(&p.neg()), G2::infinity());
        assert_eq!(p.double(), p.add(&p));
        assert_eq!(p.add(&G2::infinity()), p);
    }

    #[test]
    fn scalar_mul_edge_cases() {
        let g = G2::generator();
        assert_eq!(g.scalar_mul(&BigUint::zero()), G2::infinity());
        assert_eq!(g.scalar_mul(&ORDER), G2::infinity());
        assert_eq!(
            G2::infinity().scalar_mul(&BigUint::from(9u8)),
            G2::infinity()
        );
    }
}
