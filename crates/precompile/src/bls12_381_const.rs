//! Constants for the BLS12-381 precompile addresses, inputs and outputs.

/// BLS12_G1ADD precompile address.
pub const G1_ADD_ADDRESS: u64 = 0x0b;
/// BLS12_G1MUL precompile address.
pub const G1_MUL_ADDRESS: u64 = 0x0c;
/// BLS12_G1MSM precompile address.
pub const G1_MSM_ADDRESS: u64 = 0x0d;
/// BLS12_G2ADD precompile address.
pub const G2_ADD_ADDRESS: u64 = 0x0e;
/// BLS12_G2MUL precompile address.
pub const G2_MUL_ADDRESS: u64 = 0x0f;
/// BLS12_G2MSM precompile address.
pub const G2_MSM_ADDRESS: u64 = 0x10;
/// BLS12_PAIRING precompile address.
pub const PAIRING_ADDRESS: u64 = 0x11;
/// BLS12_MAP_FP_TO_G1 precompile address.
pub const MAP_FP_TO_G1_ADDRESS: u64 = 0x12;
/// BLS12_MAP_FP2_TO_G2 precompile address.
pub const MAP_FP2_TO_G2_ADDRESS: u64 = 0x13;

/// Meaningful bytes of an Fp element: 381 bits fit in 48 bytes.
pub const FP_LENGTH: usize = 48;
/// Encoded width of an Fp element, zero-padded to a 32-byte boundary.
pub const PADDED_FP_LENGTH: usize = 64;
/// Number of leading padding bytes of an encoded Fp element.
pub const FP_PAD_BY: usize = PADDED_FP_LENGTH - FP_LENGTH;

/// Encoded width of an Fp2 element: two padded Fp elements.
pub const PADDED_FP2_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Encoded width of a G1 point: padded x then padded y.
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Encoded width of a G2 point: two encoded Fp2 coordinates.
pub const PADDED_G2_LENGTH: usize = 2 * PADDED_FP2_LENGTH;

/// Width of a scalar; already 32-byte aligned.
pub const SCALAR_LENGTH: usize = 32;

/// G1ADD input: two encoded G1 points.
pub const G1_ADD_INPUT_LENGTH: usize = 2 * PADDED_G1_LENGTH;
/// G1MUL input: an encoded G1 point and a scalar.
pub const G1_MUL_INPUT_LENGTH: usize = PADDED_G1_LENGTH + SCALAR_LENGTH;
/// Width of one G1 MSM item: a point/scalar pair.
pub const G1_MSM_ITEM_LENGTH: usize = G1_MUL_INPUT_LENGTH;

/// G2ADD input: two encoded G2 points.
pub const G2_ADD_INPUT_LENGTH: usize = 2 * PADDED_G2_LENGTH;
/// G2MUL input: an encoded G2 point and a scalar.
pub const G2_MUL_INPUT_LENGTH: usize = PADDED_G2_LENGTH + SCALAR_LENGTH;
/// Width of one G2 MSM item.
pub const G2_MSM_ITEM_LENGTH: usize = G2_MUL_INPUT_LENGTH;

/// Width of one pairing item: a G1 point and a G2 point.
pub const PAIRING_ITEM_LENGTH: usize = PADDED_G1_LENGTH + PADDED_G2_LENGTH;
