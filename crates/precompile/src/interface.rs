//! The precompile result and error types.

use core::fmt;

/// A precompile operation result: output bytes or a validation failure.
pub type PrecompileResult = Result<Vec<u8>, PrecompileError>;

/// Precompile error type. Decode and validation failures map onto these
/// kinds at the precompile boundary; nothing else can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// Input buffer length does not match the exact expectation.
    InvalidLength,
    /// A scalar or coordinate is not canonical (>= p, or non-zero padding).
    InvalidField,
    /// Decoded coordinates do not satisfy the curve equation.
    InvalidPoint,
    /// On the curve but outside the r-torsion subgroup.
    NotInSubgroup,
    /// Decoded coordinates do not satisfy the twist equation.
    InvalidG2,
    /// No precompile is registered at the dispatched id.
    UnknownPrecompile,
}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidLength => "invalid input length",
            Self::InvalidField => "field element is not canonical",
            Self::InvalidPoint => "point is not on the curve",
            Self::NotInSubgroup => "point is not in the subgroup",
            Self::InvalidG2 => "point is not on the twist",
            Self::UnknownPrecompile => "no precompile at this id",
        };
        f.write_str(s)
    }
}

impl core::error::Error for PrecompileError {}
