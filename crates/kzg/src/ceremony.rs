//! Ceremony state machine: accept contributions, finalize into an SRS.

use curves::bls12_381::{multi_pairing, G1, G2};
use std::collections::HashSet;
use std::sync::RwLock;
use thiserror::Error;
use tracing::info;

use crate::contribution::Contribution;

/// Ceremony errors. A rejected contribution never mutates state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CeremonyError {
    #[error("ceremony is already finalized")]
    AlreadyFinalized,
    #[error("proof of knowledge failed a pairing check")]
    InvalidProof,
    #[error("contributed points are malformed")]
    InvalidPoints,
    #[error("participant already contributed")]
    DuplicateParticipant,
    #[error("ceremony has no contributions")]
    NoContributions,
    #[error("maximum number of rounds reached")]
    MaxRoundReached,
    #[error("degree must be at least 1")]
    BadDegree,
}

/// A read-only snapshot of the accumulator, handed to contributors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowersOfTau {
    /// [tau^0 G1, ..., tau^n G1].
    pub g1_powers: Vec<G1>,
    /// [tau] G2.
    pub g2_tau: G2,
}

impl PowersOfTau {
    /// The pristine accumulator with tau = 1.
    pub fn fresh(degree: usize) -> Self {
        PowersOfTau {
            g1_powers: vec![G1::generator(); degree + 1],
            g2_tau: G2::generator(),
        }
    }
}

/// The finalized structured reference string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CeremonyResult {
    pub g1_powers: Vec<G1>,
    pub g2_tau: G2,
    pub num_contributions: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Contributing,
    Finalized,
}

struct State {
    degree: usize,
    max_rounds: u32,
    round: u32,
    phase: Phase,
    powers: PowersOfTau,
    log: Vec<Contribution>,
    participants: HashSet<String>,
}

/// An in-flight powers-of-tau ceremony. All state transitions are
/// serialized behind a reader-writer lock; contribution validation (the
/// expensive pairing checks) happens before the write lock is taken.
pub struct Ceremony {
    inner: RwLock<State>,
}

impl Ceremony {
    /// Starts a ceremony for an SRS of the given polynomial degree;
    /// `max_rounds == 0` means unlimited.
    pub fn new(degree: usize, max_rounds: u32) -> Result<Self, CeremonyError> {
        if degree == 0 {
            return Err(CeremonyError::BadDegree);
        }
        Ok(Ceremony {
            inner: RwLock::new(State {
                degree,
                max_rounds,
                round: 0,
                phase: Phase::Contributing,
                powers: PowersOfTau::fresh(degree),
                log: Vec::new(),
                participants: HashSet::new(),
            }),
        })
    }

    /// The current accumulator, for the next contributor.
    pub fn current(&self) -> PowersOfTau {
        self.inner.read().expect("ceremony lock poisoned").powers.clone()
    }

    /// Rounds accepted so far.
    pub fn round(&self) -> u32 {
        self.inner.read().expect("ceremony lock poisoned").round
    }

    /// The ordered contribution log.
    pub fn contributions(&self) -> Vec<Contribution> {
        self.inner.read().expect("ceremony lock poisoned").log.clone()
    }

    /// Validates a contribution and, if it holds, applies it atomically.
    /// Returns the round number it was accepted as.
    pub fn contribute(&self, contribution: Contribution) -> Result<u32, CeremonyError> {
        // Cheap structural checks and the pairing checks run against a
        // read snapshot; the write lock below re-validates the cheap
        // conditions that could have raced.
        {
            let state = self.inner.read().expect("ceremony lock poisoned");
            Self::validate_cheap(&state, &contribution)?;
        }
        Self::validate_pairings(&contribution)?;

        let mut state = self.inner.write().expect("ceremony lock poisoned");
        Self::validate_cheap(&state, &contribution)?;

        state.powers = PowersOfTau {
            g1_powers: contribution.powers_g1.clone(),
            g2_tau: contribution.tau_g2.clone(),
        };
        state.participants.insert(contribution.participant_id.clone());
        state.round += 1;
        let round = state.round;
        info!(
            participant = %contribution.participant_id,
            round,
            "accepted powers-of-tau contribution"
        );
        state.log.push(contribution);
        Ok(round)
    }

    fn validate_cheap(state: &State, contribution: &Contribution) -> Result<(), CeremonyError> {
        if state.phase == Phase::Finalized {
            return Err(CeremonyError::AlreadyFinalized);
        }
        if state.max_rounds != 0 && state.round >= state.max_rounds {
            return Err(CeremonyError::MaxRoundReached);
        }
        if state.participants.contains(&contribution.participant_id) {
            return Err(CeremonyError::DuplicateParticipant);
        }
        if contribution.powers_g1.len() != state.degree + 1 {
            return Err(CeremonyError::InvalidPoints);
        }
        // The zeroth power is tau^0 G1 = G1 in every round.
        if contribution.powers_g1[0] != G1::generator() {
            return Err(CeremonyError::InvalidPoints);
        }
        if contribution.powers_g1[1..].iter().any(G1::is_infinity)
            || contribution.tau_g2.is_infinity()
            || contribution.pok_g1.is_infinity()
            || contribution.pok_g2.is_infinity()
        {
            return Err(CeremonyError::InvalidPoints);
        }
        Ok(())
    }

    fn validate_pairings(contribution: &Contribution) -> Result<(), CeremonyError> {
        // PoK: e(pok_g1, G2) = e(G1, pok_g2), i.e. the same witness backs
        // both halves.
        let pok_holds = multi_pairing(&[
            (contribution.pok_g1.clone(), G2::generator()),
            (G1::generator().neg(), contribution.pok_g2.clone()),
        ]);
        if !pok_holds {
            return Err(CeremonyError::InvalidProof);
        }

        // One-step consistency: e(powers[1], G2) = e(powers[0], tau_g2).
        let consistent = multi_pairing(&[
            (contribution.powers_g1[1].clone(), G2::generator()),
            (contribution.powers_g1[0].neg(), contribution.tau_g2.clone()),
        ]);
        if !consistent {
            return Err(CeremonyError::InvalidProof);
        }
        Ok(())
    }

    /// Closes the ceremony. Requires at least one accepted contribution;
    /// a second call fails with `AlreadyFinalized`.
    pub fn finalize(&self) -> Result<CeremonyResult, CeremonyError> {
        let mut state = self.inner.write().expect("ceremony lock poisoned");
        if state.phase == Phase::Finalized {
            return Err(CeremonyError::AlreadyFinalized);
        }
        if state.round == 0 {
            return Err(CeremonyError::NoContributions);
        }
        state.phase = Phase::Finalized;
        info!(rounds = state.round, "finalized powers-of-tau ceremony");
        Ok(CeremonyResult {
            g1_powers: state.powers.g1_powers.clone(),
            g2_tau: state.powers.g2_tau.clone(),
            num_contributions: state.round,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn contribute_tau(ceremony: &Ceremony, id: &str, tau: u64) -> Result<u32, CeremonyError> {
        let snapshot = ceremony.current();
        let round = ceremony.round() + 1;
        let contribution =
            Contribution::create(&snapshot, id, round, &BigUint::from(tau));
        ceremony.contribute(contribution)
    }

    #[test]
    fn three_participants_multiply_their_secrets() {
        let ceremony = Ceremony::new(4, 0).unwrap();
        contribute_tau(&ceremony, "alice", 7).unwrap();
        contribute_tau(&ceremony, "bob", 13).unwrap();
        contribute_tau(&ceremony, "carol", 23).unwrap();

        let result = ceremony.finalize().unwrap();
        assert_eq!(result.num_contributions, 3);
        assert_eq!(result.g1_powers.len(), 5);

        // tau = 7 * 13 * 23 = 2093
        let tau = BigUint::from(2093u32);
        assert_eq!(result.g1_powers[0], G1::generator());
        assert_eq!(result.g1_powers[1], G1::generator().scalar_mul(&tau));
        assert_eq!(
            result.g1_powers[2],
            G1::generator().scalar_mul(&(&tau * &tau))
        );
        assert_eq!(result.g2_tau, G2::generator().scalar_mul(&tau));
    }

    #[test]
    fn the_srs_is_order_independent() {
        let a = Ceremony::new(2, 0).unwrap();
        contribute_tau(&a, "alice", 11).unwrap();
        contribute_tau(&a, "bob", 19).unwrap();

        let b = Ceremony::new(2, 0).unwrap();
        contribute_tau(&b, "bob", 19).unwrap();
        contribute_tau(&b, "alice", 11).unwrap();

        let ra = a.finalize().unwrap();
        let rb = b.finalize().unwrap();
        assert_eq!(ra.g1_powers, rb.g1_powers);
        assert_eq!(ra.g2_tau, rb.g2_tau);
    }

    #[test]
    fn duplicate_participants_are_rejected() {
        let ceremony = Ceremony::new(2, 0).unwrap();
        contribute_tau(&ceremony, "alice", 7).unwrap();
        assert_eq!(
            contribute_tau(&ceremony, "alice", 9),
            Err(CeremonyError::DuplicateParticipant)
        );
    }

    #[test]
    fn round_limit_is_enforced() {
        let ceremony = Ceremony::new(2, 1).unwrap();
        contribute_tau(&ceremony, "alice", 7).unwrap();
        assert_eq!(
            contribute_tau(&ceremony, "bob", 9),
            Err(CeremonyError::MaxRoundReached)
        );
    }

    #[test]
    fn a_tampered_proof_is_rejected_without_state_damage() {
        let ceremony = Ceremony::new(2, 0).unwrap();
        let snapshot = ceremony.current();
        let mut contribution =
            Contribution::create(&snapshot, "mallory", 1, &BigUint::from(5u8));
        contribution.pok_g2 = G2::generator(); // wrong witness half

        assert_eq!(
            ceremony.contribute(contribution),
            Err(CeremonyError::InvalidProof)
        );
        assert_eq!(ceremony.round(), 0);
        assert_eq!(ceremony.current(), PowersOfTau::fresh(2));
    }

    #[test]
    fn inconsistent_powers_are_rejected() {
        let ceremony = Ceremony::new(2, 0).unwrap();
        let snapshot = ceremony.current();
        let mut contribution =
            Contribution::create(&snapshot, "mallory", 1, &BigUint::from(5u8));
        // claim tau = 5 in G1 but tau = 1 in G2
        contribution.tau_g2 = G2::generator();

        assert_eq!(
            ceremony.contribute(contribution),
            Err(CeremonyError::InvalidProof)
        );
    }

    #[test]
    fn finalize_requires_a_contribution_and_happens_once() {
        let ceremony = Ceremony::new(2, 0).unwrap();
        assert_eq!(ceremony.finalize(), Err(CeremonyError::NoContributions));

        contribute_tau(&ceremony, "alice", 7).unwrap();
        ceremony.finalize().unwrap();
        assert_eq!(ceremony.finalize(), Err(CeremonyError::AlreadyFinalized));
        assert_eq!(
            contribute_tau(&ceremony, "bob", 9),
            Err(CeremonyError::AlreadyFinalized)
        );
    }

    #[test]
    fn degree_zero_is_rejected() {
        assert!(matches!(Ceremony::new(0, 0), Err(CeremonyError::BadDegree)));
    }

    #[test]
    fn wrong_length_powers_are_rejected() {
        let ceremony = Ceremony::new(3, 0).unwrap();
        let snapshot = ceremony.current();
        let mut contribution =
            Contribution::create(&snapshot, "alice", 1, &BigUint::from(5u8));
        contribution.powers_g1.pop();
        assert_eq!(
            ceremony.contribute(contribution),
            Err(CeremonyError::InvalidPoints)
        );
    }
}
