//! Fp6 = Fp2[v]/(v^3 - xi), the cubic layer of the tower.

use super::fp2::Fp2;

/// c0 + c1*v + c2*v^2 with v^3 = xi.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl Fp6 {
    pub fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Fp6 { c0, c1, c2 }
    }

    pub fn zero() -> Self {
        Fp6::new(Fp2::zero(), Fp2::zero(), Fp2::zero())
    }

    pub fn one() -> Self {
        Fp6::new(Fp2::one(), Fp2::zero(), Fp2::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6::new(
            self.c0.add(&rhs.c0),
            self.c1.add(&rhs.c1),
            self.c2.add(&rhs.c2),
        )
    }

    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6::new(
            self.c0.sub(&rhs.c0),
            self.c1.sub(&rhs.c1),
            self.c2.sub(&rhs.c2),
        )
    }

    pub fn double(&self) -> Fp6 {
        self.add(self)
    }

    pub fn neg(&self) -> Fp6 {
        Fp6::new(self.c0.neg(), self.c1.neg(), self.c2.neg())
    }

    /// Karatsuba over the cubic extension: six Fp2 multiplications.
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let v2 = self.c2.mul(&rhs.c2);

        let t12 = self
            .c1
            .add(&self.c2)
            .mul(&rhs.c1.add(&rhs.c2))
            .sub(&v1)
            .sub(&v2);
        let t01 = self
            .c0
            .add(&self.c1)
            .mul(&rhs.c0.add(&rhs.c1))
            .sub(&v0)
            .sub(&v1);
        let t02 = self
            .c0
            .add(&self.c2)
            .mul(&rhs.c0.add(&rhs.c2))
            .sub(&v0)
            .sub(&v2);

        Fp6::new(
            v0.add(&t12.mul_by_nonresidue()),
            t01.add(&v2.mul_by_nonresidue()),
            t02.add(&v1),
        )
    }

    /// Chung-Hasan SQR3 squaring.
    pub fn square(&self) -> Fp6 {
        let s0 = self.c0.square();
        let s1 = self.c0.mul(&self.c1).double();
        let s2 = self.c0.sub(&self.c1).add(&self.c2).square();
        let s3 = self.c1.mul(&self.c2).double();
        let s4 = self.c2.square();

        Fp6::new(
            s0.add(&s3.mul_by_nonresidue()),
            s1.add(&s4.mul_by_nonresidue()),
            s1.add(&s2).add(&s3).sub(&s0).sub(&s4),
        )
    }

    /// Coefficient shift (c0, c1, c2) * v = (xi*c2, c0, c1).
    pub fn mul_by_v(&self) -> Fp6 {
        Fp6::new(
            self.c2.mul_by_nonresidue(),
            self.c0.clone(),
            self.c1.clone(),
        )
    }

    pub fn mul_by_fp2(&self, k: &Fp2) -> Fp6 {
        Fp6::new(self.c0.mul(k), self.c1.mul(k), self.c2.mul(k))
    }

    /// Sparse product with (b0, b1, 0), as produced by the line functions.
    pub fn mul_by_01(&self, b0: &Fp2, b1: &Fp2) -> Fp6 {
        let v0 = self.c0.mul(b0);
        let v1 = self.c1.mul(b1);

        let t12 = self.c1.add(&self.c2).mul(b1).sub(&v1);
        let t01 = self.c0.add(&self.c1).mul(&b0.add(b1)).sub(&v0).sub(&v1);
        let t02 = self.c0.add(&self.c2).mul(b0).sub(&v0);

        Fp6::new(
            v0.add(&t12.mul_by_nonresidue()),
            t01,
            t02.add(&v1),
        )
    }

    /// Inverse via the cubic cofactor formula.
    pub fn invert(&self) -> Fp6 {
        assert!(!self.is_zero(), "inversion of zero in Fp6");
        let a = self
            .c0
            .square()
            .sub(&self.c1.mul(&self.c2).mul_by_nonresidue());
        let b = self
            .c2
            .square()
            .mul_by_nonresidue()
            .sub(&self.c0.mul(&self.c1));
        let c = self.c1.square().sub(&self.c0.mul(&self.c2));

        let f = self
            .c0
            .mul(&a)
            .add(&self.c2.mul(&b).add(&self.c1.mul(&c)).mul_by_nonresidue());
        let f_inv = f.invert();

        Fp6::new(a.mul(&f_inv), b.mul(&f_inv), c.mul(&f_inv))
    }
}
