//! BLS12_G1MUL precompile.

use super::utils::{encode_g1, read_g1, read_scalar};
use crate::bls12_381_const::{G1_MUL_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::{PrecompileError, PrecompileResult};

/// G1 scalar multiplication: 160 bytes in (an encoded G1 point and a
/// 32-byte scalar), 128 bytes out.
pub fn g1_mul(input: &[u8]) -> PrecompileResult {
    if input.len() != G1_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let point = read_g1(&input[..PADDED_G1_LENGTH])?;
    let scalar = read_scalar(&input[PADDED_G1_LENGTH..]);

    Ok(encode_g1(&point.scalar_mul(&scalar)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curves::bls12_381::G1;

    #[test]
    fn multiplying_by_two_doubles() {
        let g = G1::generator();
        let mut input = encode_g1(&g);
        let mut scalar = [0u8; 32];
        scalar[31] = 2;
        input.extend_from_slice(&scalar);
        assert_eq!(g1_mul(&input).unwrap(), encode_g1(&g.double()));
    }

    #[test]
    fn zero_scalar_yields_infinity() {
        let mut input = encode_g1(&G1::generator());
        input.extend_from_slice(&[0u8; 32]);
        assert_eq!(g1_mul(&input).unwrap(), vec![0u8; PADDED_G1_LENGTH]);
    }

    #[test]
    fn infinity_point_is_a_fixed_point() {
        let mut input = vec![0u8; G1_MUL_INPUT_LENGTH];
        input[G1_MUL_INPUT_LENGTH - 1] = 7;
        assert_eq!(g1_mul(&input).unwrap(), vec![0u8; PADDED_G1_LENGTH]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            g1_mul(&[0u8; G1_MUL_INPUT_LENGTH + 1]),
            Err(PrecompileError::InvalidLength)
        );
    }
}
