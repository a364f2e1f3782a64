//! Padding, decoding and encoding helpers for the EIP-2537 wire format.

use crate::bls12_381_const::{
    FP_PAD_BY, PADDED_FP_LENGTH, PADDED_G1_LENGTH, PADDED_G2_LENGTH, SCALAR_LENGTH,
};
use crate::PrecompileError;
use curves::bls12_381::{Fp, Fp2, G1, G2};
use num_bigint::BigUint;

/// Strips the 16 zero bytes a padded Fp element carries and decodes the
/// canonical residue.
pub(super) fn remove_fp_padding(input: &[u8]) -> Result<Fp, PrecompileError> {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }
    let (padding, unpadded) = input.split_at(FP_PAD_BY);
    if !padding.iter().all(|b| *b == 0) {
        return Err(PrecompileError::InvalidField);
    }
    Fp::from_be_bytes(unpadded).ok_or(PrecompileError::InvalidField)
}

/// Decodes a padded Fp2 element, imaginary part first.
pub(super) fn remove_fp2_padding(input: &[u8]) -> Result<Fp2, PrecompileError> {
    let c1 = remove_fp_padding(&input[..PADDED_FP_LENGTH])?;
    let c0 = remove_fp_padding(&input[PADDED_FP_LENGTH..])?;
    Ok(Fp2::new(c0, c1))
}

/// Decodes an encoded G1 point, enforcing the curve equation and (except
/// for infinity) the subgroup check.
pub(super) fn read_g1(input: &[u8]) -> Result<G1, PrecompileError> {
    debug_assert_eq!(input.len(), PADDED_G1_LENGTH);
    let x = remove_fp_padding(&input[..PADDED_FP_LENGTH])?;
    let y = remove_fp_padding(&input[PADDED_FP_LENGTH..])?;
    if !G1::is_on_curve(&x, &y) {
        return Err(PrecompileError::InvalidPoint);
    }
    let point = G1::from_affine(x, y);
    if !point.is_infinity() && !point.in_subgroup() {
        return Err(PrecompileError::NotInSubgroup);
    }
    Ok(point)
}

/// Decodes an encoded G2 point, enforcing the twist equation and (except
/// for infinity) the subgroup check.
pub(super) fn read_g2(input: &[u8]) -> Result<G2, PrecompileError> {
    debug_assert_eq!(input.len(), PADDED_G2_LENGTH);
    let x = remove_fp2_padding(&input[..PADDED_G2_LENGTH / 2])?;
    let y = remove_fp2_padding(&input[PADDED_G2_LENGTH / 2..])?;
    if !G2::is_on_curve(&x, &y) {
        return Err(PrecompileError::InvalidG2);
    }
    let point = G2::from_affine(x, y);
    if !point.is_infinity() && !point.in_subgroup() {
        return Err(PrecompileError::NotInSubgroup);
    }
    Ok(point)
}

/// Reads a 32-byte scalar; EIP-2537 imposes no canonicity bound on it.
pub(super) fn read_scalar(input: &[u8]) -> BigUint {
    debug_assert_eq!(input.len(), SCALAR_LENGTH);
    BigUint::from_bytes_be(input)
}

fn pad_fp(fp: &Fp, out: &mut Vec<u8>) {
    out.extend_from_slice(&[0u8; FP_PAD_BY]);
    out.extend_from_slice(&fp.to_be_bytes());
}

/// Encodes a G1 point into the padded 128-byte form; infinity is all
/// zeros.
pub(super) fn encode_g1(point: &G1) -> Vec<u8> {
    let (x, y) = point.to_affine();
    let mut out = Vec::with_capacity(PADDED_G1_LENGTH);
    pad_fp(&x, &mut out);
    pad_fp(&y, &mut out);
    out
}

/// Encodes a G2 point into the padded 256-byte form, imaginary parts
/// first; infinity is all zeros.
pub(super) fn encode_g2(point: &G2) -> Vec<u8> {
    let (x, y) = point.to_affine();
    let mut out = Vec::with_capacity(PADDED_G2_LENGTH);
    pad_fp(&x.c1, &mut out);
    pad_fp(&x.c0, &mut out);
    pad_fp(&y.c1, &mut out);
    pad_fp(&y.c0, &mut out);
    out
}
