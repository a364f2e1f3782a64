//! A single participant's update to the accumulator.

use curves::bls12_381::constants::ORDER;
use curves::bls12_381::{G1, G2};
use num_bigint::BigUint;
use num_traits::One;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ceremony::PowersOfTau;

const POK_DOMAIN: &[u8] = b"powers-of-tau-pok-v1";

/// A participant's contribution: the updated SRS, a proof of knowledge of
/// the secret, and bookkeeping metadata.
#[derive(Clone, Debug)]
pub struct Contribution {
    /// Unique participant identity; duplicates are rejected.
    pub participant_id: String,
    /// Round this contribution was built for (metadata).
    pub round: u32,
    /// Updated G1 powers: slot i multiplied by tau^i.
    pub powers_g1: Vec<G1>,
    /// Updated [tau] G2.
    pub tau_g2: G2,
    /// PoK: [w] G1 for the derived witness w.
    pub pok_g1: G1,
    /// PoK: [w] G2 for the same witness.
    pub pok_g2: G2,
    /// Seconds since the Unix epoch at creation time.
    pub timestamp: u64,
}

/// The deterministic PoK witness w = SHA-256(domain || tau || id) mod r.
fn derive_witness(tau: &BigUint, participant_id: &str) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(POK_DOMAIN);
    hasher.update(curves::to_be_bytes(&(tau % &*ORDER), 32));
    hasher.update(participant_id.as_bytes());
    let digest = hasher.finalize();
    BigUint::from_bytes_be(&digest) % &*ORDER
}

impl Contribution {
    /// Applies a fresh secret `tau` to the current accumulator state:
    /// multiplies the i-th G1 power by tau^i and [tau]G2 by tau, and
    /// attaches the PoK pair for the derived witness.
    pub fn create(
        previous: &PowersOfTau,
        participant_id: &str,
        round: u32,
        tau: &BigUint,
    ) -> Contribution {
        let tau = tau % &*ORDER;
        let mut powers_g1 = Vec::with_capacity(previous.g1_powers.len());
        let mut tau_power = BigUint::one();
        for power in &previous.g1_powers {
            powers_g1.push(power.scalar_mul(&tau_power));
            tau_power = (&tau_power * &tau) % &*ORDER;
        }
        let tau_g2 = previous.g2_tau.scalar_mul(&tau);

        let witness = derive_witness(&tau, participant_id);
        let pok_g1 = G1::generator().scalar_mul(&witness);
        let pok_g2 = G2::generator().scalar_mul(&witness);

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Contribution {
            participant_id: participant_id.to_string(),
            round,
            powers_g1,
            tau_g2,
            pok_g1,
            pok_g2,
            timestamp,
        }
    }
}
