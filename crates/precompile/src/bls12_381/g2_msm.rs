//! BLS12_G2MSM precompile.

use super::utils::{encode_g2, read_g2, read_scalar};
use crate::bls12_381_const::{G2_MSM_ITEM_LENGTH, PADDED_G2_LENGTH};
use crate::{PrecompileError, PrecompileResult};
use curves::bls12_381::G2;
use num_bigint::BigUint;

/// G2 multi-scalar multiplication over k point/scalar items of 288 bytes
/// each; the empty input is invalid.
pub fn g2_msm(input: &[u8]) -> PrecompileResult {
    if input.is_empty() || input.len() % G2_MSM_ITEM_LENGTH != 0 {
        return Err(PrecompileError::InvalidLength);
    }

    let mut pairs: Vec<(G2, BigUint)> = Vec::with_capacity(input.len() / G2_MSM_ITEM_LENGTH);
    for item in input.chunks_exact(G2_MSM_ITEM_LENGTH) {
        let point = read_g2(&item[..PADDED_G2_LENGTH])?;
        let scalar = read_scalar(&item[PADDED_G2_LENGTH..]);
        pairs.push((point, scalar));
    }

    Ok(encode_g2(&G2::msm(&pairs)))
}
