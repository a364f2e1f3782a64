//! Compressed point wire format: 48 bytes for G1, 96 for G2.
//!
//! Byte 0 carries the flags: bit 7 set marks the compressed form, bit 6
//! marks infinity, bit 5 marks that Y is the lexicographically larger of
//! the two roots. The remaining bits hold big-endian X; for G2 the X
//! coordinate is laid out imaginary-part first (c1 then c0). Decoding
//! validates canonicity, the curve equation and subgroup membership.

use super::fp::{Fp, FP_BYTES};
use super::fp2::Fp2;
use super::g1::G1;
use super::g2::{G2, B_TWIST};
use super::constants::{MODULUS, B};
use num_bigint::BigUint;

/// Width of a compressed G1 point.
pub const G1_COMPRESSED: usize = 48;
/// Width of a compressed G2 point.
pub const G2_COMPRESSED: usize = 96;

const FLAG_COMPRESSED: u8 = 0x80;
const FLAG_INFINITY: u8 = 0x40;
const FLAG_Y_LARGE: u8 = 0x20;
const FLAG_MASK: u8 = 0xe0;

fn fp_is_larger_than_neg(y: &Fp) -> bool {
    y.as_biguint() > y.neg().as_biguint()
}

/// Lexicographic comparison of y against -y on (c1, c0).
fn fp2_is_larger_than_neg(y: &Fp2) -> bool {
    let neg = y.neg();
    match y.c1.as_biguint().cmp(neg.c1.as_biguint()) {
        core::cmp::Ordering::Greater => true,
        core::cmp::Ordering::Less => false,
        core::cmp::Ordering::Equal => y.c0.as_biguint() > neg.c0.as_biguint(),
    }
}

/// Compresses a G1 point.
pub fn g1_to_compressed(p: &G1) -> [u8; G1_COMPRESSED] {
    let mut out = [0u8; G1_COMPRESSED];
    if p.is_infinity() {
        out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
        return out;
    }
    let (x, y) = p.to_affine();
    out.copy_from_slice(&x.to_be_bytes());
    out[0] |= FLAG_COMPRESSED;
    if fp_is_larger_than_neg(&y) {
        out[0] |= FLAG_Y_LARGE;
    }
    out
}

/// Decompresses a G1 point, requiring subgroup membership.
pub fn g1_from_compressed(bytes: &[u8; G1_COMPRESSED]) -> Option<G1> {
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED == 0 {
        return None;
    }
    if flags & FLAG_INFINITY != 0 {
        if flags & FLAG_Y_LARGE != 0 {
            return None;
        }
        let rest_zero = bytes[0] & !FLAG_MASK == 0 && bytes[1..].iter().all(|b| *b == 0);
        return rest_zero.then(G1::infinity);
    }

    let mut x_bytes = *bytes;
    x_bytes[0] &= !FLAG_MASK;
    let x_int = BigUint::from_bytes_be(&x_bytes);
    if x_int >= *MODULUS {
        return None;
    }
    let x = Fp::new(x_int);

    let rhs = x.square().mul(&x).add(&Fp::from_u64(B));
    let mut y = rhs.sqrt()?;
    let want_large = flags & FLAG_Y_LARGE != 0;
    if fp_is_larger_than_neg(&y) != want_large {
        y = y.neg();
    }

    let p = G1::from_affine(x, y);
    p.in_subgroup().then_some(p)
}

/// Compresses a G2 point: flags + X.c1, then X.c0.
pub fn g2_to_compressed(p: &G2) -> [u8; G2_COMPRESSED] {
    let mut out = [0u8; G2_COMPRESSED];
    if p.is_infinity() {
        out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
        return out;
    }
    let (x, y) = p.to_affine();
    out[..FP_BYTES].copy_from_slice(&x.c1.to_be_bytes());
    out[FP_BYTES..].copy_from_slice(&x.c0.to_be_bytes());
    out[0] |= FLAG_COMPRESSED;
    if fp2_is_larger_than_neg(&y) {
        out[0] |= FLAG_Y_LARGE;
    }
    out
}

/// Decompresses a G2 point, requiring subgroup membership.
pub fn g2_from_compressed(bytes: &[u8; G2_COMPRESSED]) -> Option<G2> {
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED == 0 {
        return None;
    }
    if flags & FLAG_INFINITY != 0 {
        if flags & FLAG_Y_LARGE != 0 {
            return None;
        }
        let rest_zero = bytes[0] & !FLAG_MASK == 0 && bytes[1..].iter().all(|b| *b == 0);
        return rest_zero.then(G2::infinity);
    }

    let mut c1_bytes = [0u8; FP_BYTES];
    c1_bytes.copy_from_slice(&bytes[..FP_BYTES]);
    c1_bytes[0] &= !FLAG_MASK;
    let c1_int = BigUint::from_bytes_be(&c1_bytes);
    if c1_int >= *MODULUS {
        return None;
    }
    let c0 = Fp::from_be_bytes(&bytes[FP_BYTES..])?;
    let x = Fp2::new(c0, Fp::new(c1_int));

    let rhs = x.square().mul(&x).add(&B_TWIST);
    let mut y = rhs.sqrt()?;
    let want_large = flags & FLAG_Y_LARGE != 0;
    if fp2_is_larger_than_neg(&y) != want_large {
        y = y.neg();
    }

    let p = G2::from_affine(x, y);
    p.in_subgroup().then_some(p)
}
