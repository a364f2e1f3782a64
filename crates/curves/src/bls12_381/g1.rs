//! G1: Jacobian arithmetic on y^2 = x^3 + 4 over Fp.

use super::constants::{parse_hex, G1_COFACTOR, G1_GENERATOR_X, G1_GENERATOR_Y, ORDER, B};
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
    pub fn infinity() -> Self {
        G1 {
            x: Fp::zero(),
            y: Fp::zero(),
            z: Fp::zero(),
        }
    }

    /// The standard generator.
    pub fn generator() -> Self {
        G1::from_affine(
            Fp::new(parse_hex(G1_GENERATOR_X)),
            Fp::new(parse_hex(G1_GENERATOR_Y)),
        )
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
        y.square() == x.square().mul(x).add(&Fp::from_u64(B))
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

    /// Scalar multiplication with the scalar reduced mod the group order.
    pub fn scalar_mul(&self, k: &BigUint) -> G1 {
        if self.is_infinity() {
            return G1::infinity();
        }
        self.ladder(&(k % &*ORDER))
    }

    /// Multiplies by the unreduced cofactor h1, landing any curve point in
    /// the r-torsion subgroup.
    pub fn clear_cofactor(&self) -> G1 {
        if self.is_infinity() {
            return G1::infinity();
        }
        self.ladder(&G1_COFACTOR)
    }

    /// The definitional subgroup test [r]P = O.
    pub fn in_subgroup(&self) -> bool {
        self.ladder(&ORDER).is_infinity()
    }

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
