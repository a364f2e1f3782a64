//! BLS12-381 curve parameters.
//!
//! Primary literals per the curve's specification; derived values (twist
//! coefficient, Frobenius multipliers, the hard final-exponentiation part)
//! are computed from them at first use.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

pub(crate) fn parse_hex(s: &[u8]) -> BigUint {
    BigUint::parse_bytes(s, 16).expect("hex literal")
}

/// Base prime p, 381 bits.
pub static MODULUS: Lazy<BigUint> = Lazy::new(|| {
    parse_hex(
        b"1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
    )
});

/// Subgroup order r, 255 bits.
pub static ORDER: Lazy<BigUint> = Lazy::new(|| {
    parse_hex(b"73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001")
});

/// Curve coefficient b of y^2 = x^3 + b.
pub const B: u64 = 4;

/// |x| where x = -0xd201000000010000 is the BLS parameter; drives the
/// Miller loop and accounts for the final conjugation.
pub static X_ABS: Lazy<BigUint> = Lazy::new(|| parse_hex(b"d201000000010000"));

/// G1 cofactor h1 = #E(Fp) / r.
pub static G1_COFACTOR: Lazy<BigUint> =
    Lazy::new(|| parse_hex(b"396c8c005555e1568c00aaab0000aaab"));

/// G2 cofactor h2 = #E'(Fp2) / r.
pub static G2_COFACTOR: Lazy<BigUint> = Lazy::new(|| {
    parse_hex(
        b"5d543a95414e7f1091d50792876a202cd91de4547085abaa68a205b2e5a7ddfa628f1cb4d9e82ef21537e293a6691ae1616ec6e786f0c70cf1c38e31c7238e5",
    )
});

/// G1 generator x-coordinate.
pub const G1_GENERATOR_X: &[u8] =
    b"17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

/// G1 generator y-coordinate.
pub const G1_GENERATOR_Y: &[u8] =
    b"08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1";

/// G2 generator x-coordinate (c0, c1).
pub const G2_GENERATOR_X: (&[u8], &[u8]) = (
    b"024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
    b"13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e",
);

/// G2 generator y-coordinate (c0, c1).
pub const G2_GENERATOR_Y: (&[u8], &[u8]) = (
    b"0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801",
    b"0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_is_3_mod_4() {
        assert_eq!(&*MODULUS % BigUint::from(4u8), BigUint::from(3u8));
    }

    #[test]
    fn parameter_widths() {
        assert_eq!(MODULUS.bits(), 381);
        assert_eq!(ORDER.bits(), 255);
        assert_eq!(X_ABS.bits(), 64);
    }
}
