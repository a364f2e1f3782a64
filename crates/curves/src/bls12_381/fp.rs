//! The BLS12-381 base field Fp.

use super::constants::MODULUS;
use crate::bytes::to_be_bytes;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// Serialized width of an Fp element: 381 bits fit in 48 bytes.
pub const FP_BYTES: usize = 48;

static INV_EXP: Lazy<BigUint> = Lazy::new(|| &*MODULUS - BigUint::from(2u8));
static SQRT_EXP: Lazy<BigUint> = Lazy::new(|| (&*MODULUS + BigUint::one()) >> 2u32);
static LEGENDRE_EXP: Lazy<BigUint> = Lazy::new(|| (&*MODULUS - BigUint::one()) >> 1u32);

/// An element of Fp, held as a canonical residue in [0, p).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp(BigUint);

impl Fp {
    /// Wraps an integer, reducing it mod p.
    pub fn new(value: BigUint) -> Self {
        Fp(value % &*MODULUS)
    }

    pub fn from_u64(value: u64) -> Self {
        Fp::new(BigUint::from(value))
    }

    pub fn zero() -> Self {
        Fp(BigUint::zero())
    }

    pub fn one() -> Self {
        Fp(BigUint::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The canonical residue.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn add(&self, rhs: &Fp) -> Fp {
        Fp((&self.0 + &rhs.0) % &*MODULUS)
    }

    pub fn sub(&self, rhs: &Fp) -> Fp {
        Fp((&*MODULUS + &self.0 - &rhs.0) % &*MODULUS)
    }

    pub fn double(&self) -> Fp {
        self.add(self)
    }

    pub fn mul(&self, rhs: &Fp) -> Fp {
        Fp((&self.0 * &rhs.0) % &*MODULUS)
    }

    pub fn square(&self) -> Fp {
        self.mul(self)
    }

    pub fn neg(&self) -> Fp {
        if self.0.is_zero() {
            Fp::zero()
        } else {
            Fp(&*MODULUS - &self.0)
        }
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// Inverting zero is a contract violation, not a runtime condition.
    pub fn invert(&self) -> Fp {
        assert!(!self.is_zero(), "inversion of zero in Fp");
        Fp(self.0.modpow(&INV_EXP, &MODULUS))
    }

    pub fn pow(&self, exp: &BigUint) -> Fp {
        Fp(self.0.modpow(exp, &MODULUS))
    }

    /// Square root for p = 3 (mod 4): a^((p+1)/4), verified by squaring.
    pub fn sqrt(&self) -> Option<Fp> {
        let candidate = self.pow(&SQRT_EXP);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }

    /// Legendre symbol: 0 for zero, 1 for residues, -1 for non-residues.
    pub fn legendre(&self) -> i32 {
        if self.is_zero() {
            return 0;
        }
        if self.pow(&LEGENDRE_EXP) == Fp::one() {
            1
        } else {
            -1
        }
    }

    /// Parity bit of the canonical residue.
    pub fn sgn0(&self) -> u8 {
        self.0.bit(0) as u8
    }

    /// Returns `a` when `choice` is set, `b` otherwise.
    pub fn select(choice: bool, a: &Fp, b: &Fp) -> Fp {
        if choice {
            a.clone()
        } else {
            b.clone()
        }
    }

    /// Canonical 48-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; FP_BYTES] {
        to_be_bytes(&self.0, FP_BYTES)
            .try_into()
            .expect("fixed width")
    }

    /// Decodes a 48-byte big-endian value, rejecting non-canonical input.
    pub fn from_be_bytes(buf: &[u8]) -> Option<Fp> {
        if buf.len() != FP_BYTES {
            return None;
        }
        let value = BigUint::from_bytes_be(buf);
        if value < *MODULUS {
            Some(Fp(value))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_fp(rng: &mut impl Rng) -> Fp {
        let mut buf = [0u8; 64];
        rng.fill(&mut buf[..]);
        Fp::new(BigUint::from_bytes_be(&buf))
    }

    #[test]
    fn field_axioms_hold_on_random_elements() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let a = random_fp(&mut rng);
            let b = random_fp(&mut rng);
            let c = random_fp(&mut rng);

            assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
            assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
            assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
            assert_eq!(a.add(&a.neg()), Fp::zero());
            if !a.is_zero() {
                assert_eq!(a.mul(&a.invert()), Fp::one());
            }
        }
    }

    #[test]
    fn sqrt_round_trips_for_squares() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let a = random_fp(&mut rng);
            let square = a.square();
            let root = square.sqrt().expect("square has a root");
            assert_eq!(root.square(), square);
        }
    }

    #[test]
    fn minus_one_is_a_non_residue() {
        // p = 3 mod 4
        assert_eq!(Fp::one().neg().legendre(), -1);
        assert!(Fp::one().neg().sqrt().is_none());
    }

    #[test]
    fn byte_codec_round_trips() {
        let a = Fp::from_u64(0xabcdef);
        assert_eq!(Fp::from_be_bytes(&a.to_be_bytes()), Some(a));
        assert_eq!(Fp::from_be_bytes(&[0u8; 47]), None);
    }
}
