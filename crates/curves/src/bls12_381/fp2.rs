//! Fp2 = Fp[u]/(u^2 + 1).
//!
//! Unlike the BN254 twin, this one also carries a square root: signature
//! decompression and map-to-G2 both need it.

use super::fp::Fp;
use num_bigint::BigUint;

/// c0 + c1*u with u^2 = -1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp2 {
    pub c0: Fp,
    pub c1: Fp,
}

impl Fp2 {
    pub fn new(c0: Fp, c1: Fp) -> Self {
        Fp2 { c0, c1 }
    }

    pub fn zero() -> Self {
        Fp2::new(Fp::zero(), Fp::zero())
    }

    pub fn one() -> Self {
        Fp2::new(Fp::one(), Fp::zero())
    }

    /// Embeds a base-field element.
    pub fn from_fp(c0: Fp) -> Self {
        Fp2::new(c0, Fp::zero())
    }

    /// The sextic non-residue xi = 1 + u used to build Fp6.
    pub fn xi() -> Self {
        Fp2::new(Fp::one(), Fp::one())
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1))
    }

    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1))
    }

    pub fn double(&self) -> Fp2 {
        self.add(self)
    }

    pub fn neg(&self) -> Fp2 {
        Fp2::new(self.c0.neg(), self.c1.neg())
    }

    /// Karatsuba multiplication: three Fp multiplications.
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let cross = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));
        Fp2::new(v0.sub(&v1), cross.sub(&v0).sub(&v1))
    }

    /// Squaring via (a+b)(a-b) and 2ab.
    pub fn square(&self) -> Fp2 {
        let sum = self.c0.add(&self.c1);
        let diff = self.c0.sub(&self.c1);
        let cross = self.c0.mul(&self.c1);
        Fp2::new(sum.mul(&diff), cross.double())
    }

    pub fn mul_by_fp(&self, k: &Fp) -> Fp2 {
        Fp2::new(self.c0.mul(k), self.c1.mul(k))
    }

    /// Multiplication by xi = 1 + u: (c0 - c1, c0 + c1).
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        Fp2::new(self.c0.sub(&self.c1), self.c0.add(&self.c1))
    }

    pub fn conjugate(&self) -> Fp2 {
        Fp2::new(self.c0.clone(), self.c1.neg())
    }

    /// Inverse via the norm c0^2 + c1^2.
    pub fn invert(&self) -> Fp2 {
        assert!(!self.is_zero(), "inversion of zero in Fp2");
        let norm = self.c0.square().add(&self.c1.square());
        let t = norm.invert();
        Fp2::new(self.c0.mul(&t), self.c1.neg().mul(&t))
    }

    /// MSB-first square-and-multiply.
    pub fn pow(&self, exp: &BigUint) -> Fp2 {
        let mut acc = Fp2::one();
        if exp.bits() == 0 {
            return acc;
        }
        for i in (0..exp.bits()).rev() {
            acc = acc.square();
            if exp.bit(i) {
                acc = acc.mul(self);
            }
        }
        acc
    }

    /// Sign of an Fp2 element: sgn0(c0), falling back to sgn0(c1) when
    /// c0 is zero.
    pub fn sgn0(&self) -> u8 {
        if self.c0.is_zero() {
            self.c1.sgn0()
        } else {
            self.c0.sgn0()
        }
    }

    /// Square root via the norm: with n = c0^2 + c1^2 and s = sqrt(n), a
    /// root is (x0, c1 / 2x0) for x0 = sqrt((c0 +- s)/2). The candidate is
    /// verified by squaring, so any branch mistake surfaces as `None`
    /// rather than a wrong root.
    pub fn sqrt(&self) -> Option<Fp2> {
        if self.is_zero() {
            return Some(Fp2::zero());
        }
        if self.c1.is_zero() {
            // Purely real: either c0 is a residue, or -c0 is (u^2 = -1).
            if let Some(root) = self.c0.sqrt() {
                return Some(Fp2::new(root, Fp::zero()));
            }
            let root = self.c0.neg().sqrt()?;
            return Some(Fp2::new(Fp::zero(), root));
        }

        let norm = self.c0.square().add(&self.c1.square());
        let s = norm.sqrt()?;
        let two_inv = Fp::from_u64(2).invert();

        let mut half = self.c0.add(&s).mul(&two_inv);
        if half.legendre() != 1 {
            half = self.c0.sub(&s).mul(&two_inv);
        }
        let x0 = half.sqrt()?;
        if x0.is_zero() {
            return None;
        }
        let x1 = self.c1.mul(&two_inv).mul(&x0.invert());
        let candidate = Fp2::new(x0, x1);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }
}
