//! The BN254 base field Fp.

use super::constants::MODULUS;
use crate::bytes::to_be_bytes;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// Serialized width of an Fp element.
pub const FP_BYTES: usize = 32;

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

    /// Parity bit of the canonical residue, used as the sign tie-break.
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

    /// Canonical 32-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; FP_BYTES] {
        to_be_bytes(&self.0, FP_BYTES)
            .try_into()
            .expect("fixed width")
    }

    /// Decodes a 32-byte big-endian value, rejecting non-canonical input.
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
