//! BLS12_MAP_FP_TO_G1 precompile.

use super::utils::{encode_g1, remove_fp_padding};
use crate::bls12_381_const::PADDED_FP_LENGTH;
use crate::{PrecompileError, PrecompileResult};
use curves::bls12_381::map_to_g1;

/// Maps a 64-byte padded Fp element onto G1. The result is cofactor-cleared
/// before encoding, so it always lies in the r-torsion subgroup.
pub fn map_fp_to_g1(input: &[u8]) -> PrecompileResult {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let t = remove_fp_padding(input)?;
    let point = map_to_g1(&t).clear_cofactor();

    Ok(encode_g1(&point))
}
