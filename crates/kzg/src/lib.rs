//! The powers-of-tau trusted-setup ceremony on BLS12-381.
//!
//! A ceremony accumulates per-participant secrets into a structured
//! reference string ([tau^0 G1, ..., tau^n G1], [tau] G2) where tau is the
//! product of every accepted participant's fresh secret. The SRS is
//! binding as long as one participant honestly destroyed their secret.
//!
//! Contributions are validated entirely (two pairing checks, duplicate and
//! round accounting) before the ceremony state is touched; a rejected
//! contribution leaves no trace.

mod ceremony;
mod contribution;

pub use ceremony::{Ceremony, CeremonyError, CeremonyResult, PowersOfTau};
pub use contribution::Contribution;
