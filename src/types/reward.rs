//! Reward output types
//!
//! All output entities are request-scoped: constructed fresh per computation
//! and never persisted. Field names are camelCase on the wire (external
//! response contract).

use super::{ActorRole, MassId, Participant, ParticipantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Atomic reward unit: one participant's weighted share on one mass
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorReward {
    pub actor_type: ActorRole,
    pub participant: Participant,
    /// Role share divided across co-holders, scaled by the mass's fraction
    /// of the certificate's total processed weight
    pub weighted_percentage: Decimal,
    pub mass_id: MassId,
}

/// Per-mass reward listing (pass-through projection, no arithmetic)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassRewardEntry {
    pub mass_id: MassId,
    pub rewards: Vec<ActorReward>,
}

/// Final per-participant share across all masses under the certificate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateReward {
    pub actor_type: ActorRole,
    pub participant: Participant,
    /// Fixed four-decimal percentage string, e.g. "12.3456%"
    pub percentage: String,
}

impl CertificateReward {
    /// Parse the formatted percentage back into a decimal fraction of 100
    pub fn percentage_value(&self) -> Option<Decimal> {
        Decimal::from_str(self.percentage.trim_end_matches('%')).ok()
    }
}

/// Successful computation payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDistributionOutput {
    pub certificate_rewards: Vec<CertificateReward>,
    pub mass_rewards: Vec<MassRewardEntry>,
}

impl RewardDistributionOutput {
    /// Verify certificate rewards sum to 100%
    ///
    /// Truncation drops at most one unit of the last formatted digit per
    /// entry, so the accepted deviation scales with the entry count.
    pub fn verify_certificate_sum(&self) -> bool {
        let sum: Decimal = self
            .certificate_rewards
            .iter()
            .filter_map(CertificateReward::percentage_value)
            .sum();
        let epsilon = Decimal::new(self.certificate_rewards.len() as i64, 4);
        (Decimal::new(100, 0) - sum).abs() <= epsilon
    }

    /// Verify no single participant aggregates above 100%
    pub fn verify_participant_cap(&self) -> bool {
        let mut totals: std::collections::HashMap<&ParticipantId, Decimal> =
            std::collections::HashMap::new();
        for reward in &self.certificate_rewards {
            let value = reward.percentage_value().unwrap_or(Decimal::ZERO);
            *totals.entry(&reward.participant.id).or_insert(Decimal::ZERO) += value;
        }
        totals.values().all(|total| *total <= Decimal::new(100, 0))
    }
}
