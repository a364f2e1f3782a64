//! BLS12_G1MSM precompile.

use super::utils::{encode_g1, read_g1, read_scalar};
use crate::bls12_381_const::{G1_MSM_ITEM_LENGTH, PADDED_G1_LENGTH};
use crate::{PrecompileError, PrecompileResult};
use curves::bls12_381::G1;
use num_bigint::BigUint;

/// G1 multi-scalar multiplication over k point/scalar items of 160 bytes
/// each; the empty input is invalid.
pub fn g1_msm(input: &[u8]) -> PrecompileResult {
    if input.is_empty() || input.len() % G1_MSM_ITEM_LENGTH != 0 {
        return Err(PrecompileError::InvalidLength);
    }

    let mut pairs: Vec<(G1, BigUint)> = Vec::with_capacity(input.len() / G1_MSM_ITEM_LENGTH);
    for item in input.chunks_exact(G1_MSM_ITEM_LENGTH) {
        let point = read_g1(&item[..PADDED_G1_LENGTH])?;
        let scalar = read_scalar(&item[PADDED_G1_LENGTH..]);
        pairs.push((point, scalar));
    }

    Ok(encode_g1(&G1::msm(&pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(point: &G1, scalar: u64) -> Vec<u8> {
        let mut out = encode_g1(point);
        let mut s = [0u8; 32];
        s[24..].copy_from_slice(&scalar.to_be_bytes());
        out.extend_from_slice(&s);
        out
    }

    #[test]
    fn msm_matches_the_sum_of_scalar_muls() {
        let g = G1::generator();
        let mut input = item(&g, 3);
        input.extend_from_slice(&item(&g.double(), 5));

        // 3G + 5*(2G) = 13G
        let expected = g.scalar_mul(&BigUint::from(13u8));
        assert_eq!(g1_msm(&input).unwrap(), encode_g1(&expected));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(g1_msm(&[]), Err(PrecompileError::InvalidLength));
    }

    #[test]
    fn ragged_input_is_rejected() {
        assert_eq!(
            g1_msm(&vec![0u8; G1_MSM_ITEM_LENGTH + 1]),
            Err(PrecompileError::InvalidLength)
        );
    }

    #[test]
    fn infinity_items_contribute_nothing() {
        let g = G1::generator();
        let mut input = item(&g, 1);
        input.extend_from_slice(&item(&G1::infinity(), 999));
        assert_eq!(g1_msm(&input).unwrap(), encode_g1(&g));
    }
}
