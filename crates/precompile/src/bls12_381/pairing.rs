//! BLS12_PAIRING precompile.

use super::utils::{read_g1, read_g2};
use crate::bls12_381_const::{PADDED_G1_LENGTH, PAIRING_ITEM_LENGTH};
use crate::utilities::bool_to_bytes32;
use crate::{PrecompileError, PrecompileResult};
use curves::bls12_381::multi_pairing;

/// Pairing check over k (G1, G2) pairs of 384 bytes each; the empty input
/// is invalid. Output is 32 bytes whose last byte is 1 iff the product of
/// pairings is the identity.
pub fn pairing(input: &[u8]) -> PrecompileResult {
    if input.is_empty() || input.len() % PAIRING_ITEM_LENGTH != 0 {
        return Err(PrecompileError::InvalidLength);
    }

    let mut pairs = Vec::with_capacity(input.len() / PAIRING_ITEM_LENGTH);
    for item in input.chunks_exact(PAIRING_ITEM_LENGTH) {
        let a = read_g1(&item[..PADDED_G1_LENGTH])?;
        let b = read_g2(&item[PADDED_G1_LENGTH..])?;
        pairs.push((a, b));
    }

    Ok(bool_to_bytes32(multi_pairing(&pairs)))
}
