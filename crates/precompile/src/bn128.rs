//! BN254 precompiles added in [`EIP-196`](https://eips.ethereum.org/EIPS/eip-196)
//! and [`EIP-197`](https://eips.ethereum.org/EIPS/eip-197).
//!
//! Coordinates are 32-byte big-endian field elements; G2 coordinates are
//! Fp2 values laid out imaginary-part first (xIm || xRe || yIm || yRe).
//! Add and mul right-pad short inputs with zeros, the pairing input must be
//! an exact multiple of the 192-byte pair length, and the empty pairing
//! product is the identity.

use crate::utilities::{bool_to_bytes32, right_pad};
use crate::{PrecompileError, PrecompileResult};
use curves::bn254::{multi_pairing, Fp, Fp2, G1, G2};
use num_bigint::BigUint;

/// BN254 add precompile address.
pub const ADD_ADDRESS: u64 = 0x06;
/// BN254 scalar-mul precompile address.
pub const MUL_ADDRESS: u64 = 0x07;
/// BN254 pairing precompile address.
pub const PAIR_ADDRESS: u64 = 0x08;

/// Bytes per base-field element.
const FQ_LEN: usize = 32;
/// Bytes per scalar.
const SCALAR_LEN: usize = 32;
/// Bytes per Fp2 element.
const FQ2_LEN: usize = 2 * FQ_LEN;
/// Bytes per uncompressed G1 point.
const G1_LEN: usize = 2 * FQ_LEN;
/// Bytes per uncompressed G2 point.
const G2_LEN: usize = 2 * FQ2_LEN;

/// Input length for the add operation: two G1 points.
pub const ADD_INPUT_LEN: usize = 2 * G1_LEN;
/// Input length for the mul operation: a G1 point and a scalar.
pub const MUL_INPUT_LEN: usize = G1_LEN + SCALAR_LEN;
/// Length of one pairing-input element: a G1 point and a G2 point.
pub const PAIR_ELEMENT_LEN: usize = G1_LEN + G2_LEN;

fn read_fq(input: &[u8]) -> Result<Fp, PrecompileError> {
    Fp::from_be_bytes(&input[..FQ_LEN]).ok_or(PrecompileError::InvalidField)
}

fn read_g1_point(input: &[u8]) -> Result<G1, PrecompileError> {
    let x = read_fq(&input[..FQ_LEN])?;
    let y = read_fq(&input[FQ_LEN..G1_LEN])?;
    if !G1::is_on_curve(&x, &y) {
        return Err(PrecompileError::InvalidPoint);
    }
    Ok(G1::from_affine(x, y))
}

/// G2 coordinates arrive imaginary-part first.
fn read_g2_point(input: &[u8]) -> Result<G2, PrecompileError> {
    let x_c1 = read_fq(&input[..FQ_LEN])?;
    let x_c0 = read_fq(&input[FQ_LEN..2 * FQ_LEN])?;
    let y_c1 = read_fq(&input[2 * FQ_LEN..3 * FQ_LEN])?;
    let y_c0 = read_fq(&input[3 * FQ_LEN..4 * FQ_LEN])?;
    let x = Fp2::new(x_c0, x_c1);
    let y = Fp2::new(y_c0, y_c1);
    if !G2::is_on_curve(&x, &y) {
        return Err(PrecompileError::InvalidG2);
    }
    Ok(G2::from_affine(x, y))
}

fn read_scalar(input: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&input[..SCALAR_LEN])
}

fn encode_g1_point(point: &G1) -> Vec<u8> {
    let (x, y) = point.to_affine();
    let mut out = Vec::with_capacity(G1_LEN);
    out.extend_from_slice(&x.to_be_bytes());
    out.extend_from_slice(&y.to_be_bytes());
    out
}

/// Runs the BN254 add precompile (0x06).
pub fn run_add(input: &[u8]) -> PrecompileResult {
    let input = right_pad::<ADD_INPUT_LEN>(input);

    let p1 = read_g1_point(&input[..G1_LEN])?;
    let p2 = read_g1_point(&input[G1_LEN..])?;

    Ok(encode_g1_point(&p1.add(&p2)))
}

/// Runs the BN254 scalar-mul precompile (0x07).
pub fn run_mul(input: &[u8]) -> PrecompileResult {
    let input = right_pad::<MUL_INPUT_LEN>(input);

    let p = read_g1_point(&input[..G1_LEN])?;
    let scalar = read_scalar(&input[G1_LEN..]);

    Ok(encode_g1_point(&p.scalar_mul(&scalar)))
}

/// Runs the BN254 pairing precompile (0x08). Output is 32 bytes whose last
/// byte is 1 iff the pairing product is the identity.
pub fn run_pair(input: &[u8]) -> PrecompileResult {
    if input.len() % PAIR_ELEMENT_LEN != 0 {
        return Err(PrecompileError::InvalidLength);
    }

    let mut pairs = Vec::with_capacity(input.len() / PAIR_ELEMENT_LEN);
    for element in input.chunks_exact(PAIR_ELEMENT_LEN) {
        // Validation is unconditional: a pair is rejected even when its
        // other half is the (no-op) point at infinity.
        let a = read_g1_point(&element[..G1_LEN])?;
        let b = read_g2_point(&element[G1_LEN..])?;
        pairs.push((a, b));
    }

    Ok(bool_to_bytes32(multi_pairing(&pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curves::bn254::constants::ORDER;
    use rand::Rng;

    fn encode_g2_point(point: &G2) -> Vec<u8> {
        let (x, y) = point.to_affine();
        let mut out = Vec::with_capacity(G2_LEN);
        out.extend_from_slice(&x.c1.to_be_bytes());
        out.extend_from_slice(&x.c0.to_be_bytes());
        out.extend_from_slice(&y.c1.to_be_bytes());
        out.extend_from_slice(&y.c0.to_be_bytes());
        out
    }

    fn random_scalar(rng: &mut impl Rng) -> BigUint {
        let mut buf = [0u8; 32];
        rng.fill(&mut buf[..]);
        BigUint::from_bytes_be(&buf) % &*ORDER
    }

    #[test]
    fn test_alt_bn128_add() {
        let input = hex::decode(
            "\
             18b18acfb4c2c30276db5411368e7185b311dd124691610c5d3b74034e093dc9\
             063c909c4720840cb5134cb9f59fa749755796819658d32efc0d288198f37266\
             07c2b7f58a84bd6145f00c9c2bc0bb1a187f20ff2c92963a88019e7c6a014eed\
             06614e20c147e940f2d70da3f74c9a17df361706a4485c742bd6788478fa17d7",
        )
        .unwrap();
        let expected = hex::decode(
            "\
            2243525c5efd4b9c3d3c45ac0ca3fe4dd85e830a4ce6b65fa1eeaee202839703\
            301d1d33be6da8e509df21cc35964723180eed7532537db9ae5e7d48f195c915",
        )
        .unwrap();
        assert_eq!(run_add(&input).unwrap(), expected);

        // Zero-sum test
        let input = [0u8; 128];
        assert_eq!(run_add(&input).unwrap(), vec![0u8; 64]);

        // No input: right-padded to two infinities
        assert_eq!(run_add(&[]).unwrap(), vec![0u8; 64]);

        // Point not on curve
        let input = [0x11u8; 128];
        assert_eq!(run_add(&input), Err(PrecompileError::InvalidPoint));
    }

    #[test]
    fn generator_doubling_matches_the_known_2g() {
        // G + G
        let mut input = vec![0u8; 128];
        input[31] = 1;
        input[63] = 2;
        input[95] = 1;
        input[127] = 2;
        let expected = hex::decode(
            "\
            030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3\
            15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4",
        )
        .unwrap();
        assert_eq!(run_add(&input).unwrap(), expected);

        // 2 * G through the mul precompile
        let mut input = vec![0u8; 96];
        input[31] = 1;
        input[63] = 2;
        input[95] = 2;
        assert_eq!(run_mul(&input).unwrap(), expected);
    }

    #[test]
    fn test_alt_bn128_mul() {
        let input = hex::decode(
            "\
            2bd3e6d0f3b142924f5ca7b49ce5b9d54c4703d7ae5648e61d02268b1a0a9fb7\
            21611ce0a6af85915e2f1d70300909ce2e49dfad4a4619c8390cae66cefdb204\
            00000000000000000000000000000000000000000000000011138ce750fa15c2",
        )
        .unwrap();
        let expected = hex::decode(
            "\
            070a8d6a982153cae4be29d434e8faef8a47b274a053f5a4ee2a6c9c13c31e5c\
            031b8ce914eba3a9ffb989f9cdd5b0f01943074bf4f0f315690ec3cec6981afc",
        )
        .unwrap();
        assert_eq!(run_mul(&input).unwrap(), expected);

        // Zero multiplication: 0 * 2 with a garbage-free encoding
        let mut input = vec![0u8; 96];
        input[64] = 0x02;
        assert_eq!(run_mul(&input).unwrap(), vec![0u8; 64]);

        // No input
        assert_eq!(run_mul(&[]).unwrap(), vec![0u8; 64]);

        // Point not on curve
        let mut input = vec![0x11u8; 64];
        input.extend_from_slice(&[0x0f; 32]);
        assert_eq!(run_mul(&input), Err(PrecompileError::InvalidPoint));
    }

    #[test]
    fn test_alt_bn128_pair() {
        let input = hex::decode(
            "\
            1c76476f4def4bb94541d57ebba1193381ffa7aa76ada664dd31c16024c43f59\
            3034dd2920f673e204fee2811c678745fc819b55d3e9d294e45c9b03a76aef41\
            209dd15ebff5d46c4bd888e51a93cf99a7329636c63514396b4a452003a35bf7\
            04bf11ca01483bfa8b34b43561848d28905960114c8ac04049af4b6315a41678\
            2bb8324af6cfc93537a2ad1a445cfd0ca2a71acd7ac41fadbf933c2a51be344d\
            120a2a4cf30c1bf9845f20c6fe39e07ea2cce61f0c9bb048165fe5e4de877550\
            111e129f1cf1097710d41c4ac70fcdfa5ba2023c6ff1cbeac322de49d1b6df7c\
            2032c61a830e3c17286de9462bf242fca2883585b93870a73853face6a6bf411\
            198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2\
            1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed\
            090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b\
            12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
        )
        .unwrap();
        let expected =
            hex::decode("0000000000000000000000000000000000000000000000000000000000000001")
                .unwrap();
        assert_eq!(run_pair(&input).unwrap(), expected);

        // Empty input is the empty product
        assert_eq!(run_pair(&[]).unwrap(), expected);

        // e(G1, G2) alone is not the identity
        let mut single = encode_g1_point(&G1::generator());
        single.extend_from_slice(&encode_g2_point(&G2::generator()));
        assert_eq!(run_pair(&single).unwrap()[31], 0);

        // Point not on curve
        let input = [0x11u8; 192];
        assert_eq!(run_pair(&input), Err(PrecompileError::InvalidPoint));

        // Length not a multiple of the pair size
        let input = [0x11u8; 75];
        assert_eq!(run_pair(&input), Err(PrecompileError::InvalidLength));
    }

    #[test]
    fn pairing_accepts_constructed_matching_pairs() {
        // e(aG1, bG2) * e(-(ab)G1, G2) = 1
        let mut rng = rand::thread_rng();
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let ab = (&a * &b) % &*ORDER;

        let mut input = encode_g1_point(&G1::generator().scalar_mul(&a));
        input.extend_from_slice(&encode_g2_point(&G2::generator().scalar_mul(&b)));
        input.extend_from_slice(&encode_g1_point(&G1::generator().scalar_mul(&ab).neg()));
        input.extend_from_slice(&encode_g2_point(&G2::generator()));

        assert_eq!(run_pair(&input).unwrap()[31], 1);
    }

    #[test]
    fn pairing_with_an_infinity_half_skips_the_pair() {
        // (O, G2) then (G1, O): both no-ops, so the product is the identity.
        let mut input = vec![0u8; G1_LEN];
        input.extend_from_slice(&encode_g2_point(&G2::generator()));
        input.extend_from_slice(&encode_g1_point(&G1::generator()));
        input.extend_from_slice(&vec![0u8; G2_LEN]);
        assert_eq!(run_pair(&input).unwrap()[31], 1);
    }

    #[test]
    fn scalar_larger_than_the_group_order_wraps() {
        // (order + 2) * G = 2 * G
        let mut input = vec![0u8; 96];
        input[31] = 1;
        input[63] = 2;
        let wrapped = &*ORDER + BigUint::from(2u8);
        let bytes = wrapped.to_bytes_be();
        input[96 - bytes.len()..].copy_from_slice(&bytes);

        let expected = run_mul(&{
            let mut two = vec![0u8; 96];
            two[31] = 1;
            two[63] = 2;
            two[95] = 2;
            two
        })
        .unwrap();
        assert_eq!(run_mul(&input).unwrap(), expected);
    }
}
