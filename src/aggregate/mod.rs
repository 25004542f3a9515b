//! Reward Aggregation
//!
//! Two read-only projections over the flat reward record list:
//! - per-mass grouping (pass-through, for per-mass reporting)
//! - per-certificate grouping by (role, participant), summing weighted
//!   contributions into one formatted percentage per participant
//!
//! Output ordering is the insertion order of first occurrence, so repeated
//! runs over identical inputs serialize byte-identically.

use crate::distribution::math;
use crate::types::{
    ActorReward, ActorRole, CertificateReward, MassId, MassRewardEntry, Participant, ParticipantId,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Group reward records by mass document
pub fn group_by_mass(rewards: &[ActorReward]) -> Vec<MassRewardEntry> {
    let mut entries: Vec<MassRewardEntry> = Vec::new();
    let mut index: HashMap<MassId, usize> = HashMap::new();

    for reward in rewards {
        match index.get(&reward.mass_id) {
            Some(&i) => entries[i].rewards.push(reward.clone()),
            None => {
                index.insert(reward.mass_id.clone(), entries.len());
                entries.push(MassRewardEntry {
                    mass_id: reward.mass_id.clone(),
                    rewards: vec![reward.clone()],
                });
            }
        }
    }

    entries
}

/// Sum weighted contributions by (role, participant) across all masses
pub fn aggregate_certificate(rewards: &[ActorReward]) -> Vec<CertificateReward> {
    let mut order: Vec<(ActorRole, Participant, Decimal)> = Vec::new();
    let mut index: HashMap<(ActorRole, ParticipantId), usize> = HashMap::new();

    for reward in rewards {
        let key = (reward.actor_type, reward.participant.id.clone());
        match index.get(&key) {
            Some(&i) => order[i].2 += reward.weighted_percentage,
            None => {
                index.insert(key, order.len());
                order.push((
                    reward.actor_type,
                    reward.participant.clone(),
                    reward.weighted_percentage,
                ));
            }
        }
    }

    order
        .into_iter()
        .map(|(actor_type, participant, total)| CertificateReward {
            actor_type,
            participant,
            percentage: math::percentage_string(total),
        })
        .collect()
}
