//! Ethereum precompiled contracts backed by the from-scratch curve
//! implementations in [`curves`]: the EIP-196/EIP-197 BN254 operations and
//! the EIP-2537 BLS12-381 suite.
//!
//! Every entry point takes an opaque input buffer and returns the output
//! buffer or a [`PrecompileError`]; validation happens before any
//! arithmetic and a failing call has no side effects. Nothing in this
//! crate panics on untrusted input.

pub mod bls12_381;
pub mod bls12_381_const;
pub mod bn128;
mod interface;
pub mod utilities;

pub use interface::{PrecompileError, PrecompileResult};

use bls12_381_const::{
    G1_ADD_ADDRESS, G1_MSM_ADDRESS, G1_MUL_ADDRESS, G2_ADD_ADDRESS, G2_MSM_ADDRESS,
    G2_MUL_ADDRESS, MAP_FP2_TO_G2_ADDRESS, MAP_FP_TO_G1_ADDRESS, PAIRING_ADDRESS,
};

/// Routes a call to the precompile registered at `precompile_id`; ids this
/// crate does not implement fail with [`PrecompileError::UnknownPrecompile`].
pub fn dispatch(precompile_id: u64, input: &[u8]) -> Result<Vec<u8>, PrecompileError> {
    match precompile_id {
        bn128::ADD_ADDRESS => bn128::run_add(input),
        bn128::MUL_ADDRESS => bn128::run_mul(input),
        bn128::PAIR_ADDRESS => bn128::run_pair(input),
        G1_ADD_ADDRESS => bls12_381::g1_add::g1_add(input),
        G1_MUL_ADDRESS => bls12_381::g1_mul::g1_mul(input),
        G1_MSM_ADDRESS => bls12_381::g1_msm::g1_msm(input),
        G2_ADD_ADDRESS => bls12_381::g2_add::g2_add(input),
        G2_MUL_ADDRESS => bls12_381::g2_mul::g2_mul(input),
        G2_MSM_ADDRESS => bls12_381::g2_msm::g2_msm(input),
        PAIRING_ADDRESS => bls12_381::pairing::pairing(input),
        MAP_FP_TO_G1_ADDRESS => bls12_381::map_fp_to_g1::map_fp_to_g1(input),
        MAP_FP2_TO_G2_ADDRESS => bls12_381::map_fp2_to_g2::map_fp2_to_g2(input),
        _ => Err(PrecompileError::UnknownPrecompile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_covers_the_registered_ids() {
        // BN254 pairing of the empty input is the identity.
        let out = dispatch(bn128::PAIR_ADDRESS, &[]).unwrap();
        assert_eq!(out[31], 1);

        // Unknown ids are an error.
        assert_eq!(dispatch(0x05, &[]), Err(PrecompileError::UnknownPrecompile));
        assert_eq!(dispatch(0xff, &[]), Err(PrecompileError::UnknownPrecompile));
    }

    #[test]
    fn dispatch_reaches_the_bls_suite() {
        let input = [0u8; 512];
        let out = dispatch(G2_ADD_ADDRESS, &input).unwrap();
        assert_eq!(out, vec![0u8; 256]);
    }
}
