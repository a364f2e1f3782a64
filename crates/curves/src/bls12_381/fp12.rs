//! Fp12 = Fp6[w]/(w^2 - v), the pairing target field.
//!
//! Same slot convention as the BN254 tower: writing an element as
//! sum a_i w^i under w^2 = v, c0 = (a0, a2, a4) and c1 = (a1, a3, a5), and
//! pi^k multiplies coefficient i by gamma_{k,i} = xi^(i (p^k - 1)/6) after
//! conjugating for odd k.

use super::constants::MODULUS;
use super::fp2::Fp2;
use super::fp6::Fp6;
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

static FROBENIUS_COEFFS: Lazy<[[Fp2; 6]; 3]> = Lazy::new(|| {
    let six = BigUint::from(6u8);
    core::array::from_fn(|k| {
        let pk = MODULUS.pow(k as u32 + 1);
        let step = (pk - BigUint::one()) / &six;
        core::array::from_fn(|i| Fp2::xi().pow(&(&step * BigUint::from(i))))
    })
});

/// c0 + c1*w with w^2 = v.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl Fp12 {
    pub fn new(c0: Fp6, c1: Fp6) -> Self {
        Fp12 { c0, c1 }
    }

    pub fn zero() -> Self {
        Fp12::new(Fp6::zero(), Fp6::zero())
    }

    pub fn one() -> Self {
        Fp12::new(Fp6::one(), Fp6::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        *self == Fp12::one()
    }

    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1))
    }

    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1))
    }

    pub fn neg(&self) -> Fp12 {
        Fp12::new(self.c0.neg(), self.c1.neg())
    }

    /// Karatsuba in w; the cross term folds back through w^2 = v.
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let cross = self
            .c0
            .add(&self.c1)
            .mul(&rhs.c0.add(&rhs.c1))
            .sub(&aa)
            .sub(&bb);
        Fp12::new(aa.add(&bb.mul_by_v()), cross)
    }

    pub fn square(&self) -> Fp12 {
        self.mul(self)
    }

    /// Conjugation of the quadratic extension; equals the p^6 Frobenius.
    pub fn conjugate(&self) -> Fp12 {
        Fp12::new(self.c0.clone(), self.c1.neg())
    }

    /// (a + b*w)^-1 = (a - b*w) / (a^2 - v*b^2).
    pub fn invert(&self) -> Fp12 {
        assert!(!self.is_zero(), "inversion of zero in Fp12");
        let denom = self.c0.square().sub(&self.c1.square().mul_by_v());
        let t = denom.invert();
        Fp12::new(self.c0.mul(&t), self.c1.neg().mul(&t))
    }

    /// MSB-first square-and-multiply.
    pub fn pow(&self, exp: &BigUint) -> Fp12 {
        let mut acc = Fp12::one();
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

    /// The p^k-power Frobenius for k in {1, 2, 3}.
    pub fn frobenius(&self, k: usize) -> Fp12 {
        assert!((1..=3).contains(&k), "frobenius power out of range");
        let gamma = &FROBENIUS_COEFFS[k - 1];
        let conj = k % 2 == 1;

        let map = |c: &Fp2, i: usize| {
            let base = if conj { c.conjugate() } else { c.clone() };
            base.mul(&gamma[i])
        };

        Fp12::new(
            Fp6::new(
                map(&self.c0.c0, 0),
                map(&self.c0.c1, 2),
                map(&self.c0.c2, 4),
            ),
            Fp6::new(
                map(&self.c1.c0, 1),
                map(&self.c1.c1, 3),
                map(&self.c1.c2, 5),
            ),
        )
    }

    /// Generic f^(p^k); the cross-check for the precomputed tables.
    pub fn pow_p(&self, k: usize) -> Fp12 {
        self.pow(&MODULUS.pow(k as u32))
    }
}
