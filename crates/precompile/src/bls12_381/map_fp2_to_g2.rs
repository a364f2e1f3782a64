//! BLS12_MAP_FP2_TO_G2 precompile.

use super::utils::{encode_g2, remove_fp2_padding};
use crate::bls12_381_const::PADDED_FP2_LENGTH;
use crate::{PrecompileError, PrecompileResult};
use curves::bls12_381::map_to_g2;

/// Maps a 128-byte padded Fp2 element (imaginary part first) onto G2. The
/// result is cofactor-cleared before encoding.
pub fn map_fp2_to_g2(input: &[u8]) -> PrecompileResult {
    if input.len() != PADDED_FP2_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let t = remove_fp2_padding(input)?;
    let point = map_to_g2(&t).clear_cofactor();

    Ok(encode_g2(&point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::utils::read_g2;
    use curves::bls12_381::{Fp, Fp2};

    fn padded(t: &Fp2) -> Vec<u8> {
        let mut out = vec![0u8; 16];
        out.extend_from_slice(&t.c1.to_be_bytes());
        out.extend_from_slice(&[0u8; 16]);
        out.extend_from_slice(&t.c0.to_be_bytes());
        out
    }

    #[test]
    fn mapping_is_deterministic_and_lands_in_the_subgroup() {
        let t = Fp2::new(Fp::from_u64(7), Fp::from_u64(11));
        let input = padded(&t);
        let first = map_fp2_to_g2(&input).unwrap();
        assert_eq!(first, map_fp2_to_g2(&input).unwrap());

        let decoded = read_g2(&first).expect("output decodes and is in the subgroup");
        assert!(!decoded.is_infinity());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            map_fp2_to_g2(&[0u8; PADDED_FP2_LENGTH - 1]),
            Err(PrecompileError::InvalidLength)
        );
    }

    #[test]
    fn nonzero_padding_is_rejected() {
        let mut input = padded(&Fp2::new(Fp::from_u64(1), Fp::from_u64(2)));
        input[70] = 9;
        assert_eq!(map_fp2_to_g2(&input), Err(PrecompileError::InvalidField));
    }
}
