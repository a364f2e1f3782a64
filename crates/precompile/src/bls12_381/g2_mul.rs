//! BLS12_G2MUL precompile.

use super::utils::{encode_g2, read_g2, read_scalar};
use crate::bls12_381_const::{G2_MUL_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::{PrecompileError, PrecompileResult};

/// G2 scalar multiplication: 288 bytes in (an encoded G2 point and a
/// 32-byte scalar), 256 bytes out.
pub fn g2_mul(input: &[u8]) -> PrecompileResult {
    if input.len() != G2_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let point = read_g2(&input[..PADDED_G2_LENGTH])?;
    let scalar = read_scalar(&input[PADDED_G2_LENGTH..]);

    Ok(encode_g2(&point.scalar_mul(&scalar)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curves::bls12_381::G2;

    #[test]
    fn multiplying_by_two_doubles() {
        let g = G2::generator();
        let mut input = encode_g2(&g);
        let mut scalar = [0u8; 32];
        scalar[31] = 2;
        input.extend_from_slice(&scalar);
        assert_eq!(g2_mul(&input).unwrap(), encode_g2(&g.double()));
    }

    #[test]
    fn zero_scalar_yields_infinity() {
        let mut input = encode_g2(&G2::generator());
        input.extend_from_slice(&[0u8; 32]);
        assert_eq!(g2_mul(&input).unwrap(), vec![0u8; PADDED_G2_LENGTH]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(g2_mul(&[]), Err(PrecompileError::InvalidLength));
    }
}
