//! BN254 curve parameters.
//!
//! The primary constants are the literals Ethereum fixed in EIP-196/EIP-197;
//! everything else (twist coefficient, Frobenius multipliers, the hard part
//! of the final exponentiation) is derived from them once at first use.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Base prime p of Fp, approximately 2^254.
pub static MODULUS: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088696311157297823662689037894645226208583",
        10,
    )
    .expect("modulus literal")
});

/// Order n of the G1/G2 subgroups (the scalar field).
pub static ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("order literal")
});

/// Curve coefficient b of y^2 = x^3 + b.
pub const B: u64 = 3;

/// The BN parameter u. |6u+2| drives the Miller loop.
pub const U: u64 = 4_965_661_367_192_848_881;

/// 6u + 2 = 29793968203157093288, the optimal-ate loop parameter.
pub static SIX_U_PLUS_2: Lazy<BigUint> =
    Lazy::new(|| BigUint::from(6u8) * BigUint::from(U) + BigUint::from(2u8));

/// G2 generator, x-coordinate (c0, c1) over Fp2.
pub const G2_GENERATOR_X: (&str, &str) = (
    "10857046999023057135944570762232829481370756359578518086990519993285655852781",
    "11559732032986387107991004021392285783925812861821192530917403151452391805634",
);

/// G2 generator, y-coordinate (c0, c1) over Fp2.
pub const G2_GENERATOR_Y: (&str, &str) = (
    "8495653923123431417604973247489272438418190587263600148770280649306958101930",
    "4082367875863433681332203403145435568316851327593401208105741076214120093531",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_u_plus_2_matches_literal() {
        assert_eq!(
            *SIX_U_PLUS_2,
            BigUint::parse_bytes(b"29793968203157093288", 10).unwrap()
        );
    }

    #[test]
    fn modulus_is_3_mod_4() {
        assert_eq!(&*MODULUS % BigUint::from(4u8), BigUint::from(3u8));
    }
}
