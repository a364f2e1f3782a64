//! BLS12_G1ADD precompile.

use super::utils::{encode_g1, read_g1};
use crate::bls12_381_const::{G1_ADD_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::{PrecompileError, PrecompileResult};

/// G1 addition: 256 bytes in (two encoded G1 points), 128 bytes out.
pub fn g1_add(input: &[u8]) -> PrecompileResult {
    if input.len() != G1_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let a = read_g1(&input[..PADDED_G1_LENGTH])?;
    let b = read_g1(&input[PADDED_G1_LENGTH..])?;

    Ok(encode_g1(&a.add(&b)))
}
