//! BLS12_G2ADD precompile.

use super::utils::{encode_g2, read_g2};
use crate::bls12_381_const::{G2_ADD_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::{PrecompileError, PrecompileResult};

/// G2 addition: 512 bytes in (two encoded G2 points), 256 bytes out.
pub fn g2_add(input: &[u8]) -> PrecompileResult {
    if input.len() != G2_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let a = read_g2(&input[..PADDED_G2_LENGTH])?;
    let b = read_g2(&input[PADDED_G2_LENGTH..])?;

    Ok(encode_g2(&a.add(&b)))
}
