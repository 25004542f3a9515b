//! Reward Expansion
//!
//! Turns per-role percentages into per-participant reward records. Physical
//! role holders come from the mass roster; Network and Appointed-NGO holders
//! come from the methodology document. A role with no holder produces no
//! record: its value was already redirected by the adjustment rules.

use super::{math, RoleShare};
use crate::roster::ActorRoster;
use crate::types::{ActorReward, MassDocument, MethodologyDocument, Participant};
use rust_decimal::Decimal;

/// Expand role shares into weighted per-participant rewards for one mass
///
/// `weight_fraction` is the mass's share of the certificate's total
/// processed weight (validated positive upstream).
pub fn expand_rewards(
    mass: &MassDocument,
    shares: &[RoleShare],
    roster: &ActorRoster,
    methodology: &MethodologyDocument,
    weight_fraction: Decimal,
) -> Vec<ActorReward> {
    let mut rewards = Vec::new();

    for share in shares {
        let holders: Vec<&Participant> = if share.role.is_physical() {
            roster.participants_for(share.role)
        } else {
            methodology.participant_for(share.role).into_iter().collect()
        };

        if holders.is_empty() {
            continue;
        }

        let per_holder = math::div(share.percentage, Decimal::from(holders.len() as i64));
        let weighted = math::mul(per_holder, weight_fraction);

        for participant in holders {
            rewards.push(ActorReward {
                actor_type: share.role,
                participant: participant.clone(),
                weighted_percentage: weighted,
                mass_id: mass.id.clone(),
            });
        }
    }

    rewards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::AdjustmentEngine;
    use crate::table::DistributionTable;
    use crate::types::{ActorEvent, ActorRole, WasteSubtype};

    fn methodology() -> MethodologyDocument {
        MethodologyDocument::new(
            "methodology:1",
            Participant::new("part:net", "Platform Network"),
            Participant::new("part:ngo", "Appointed NGO"),
        )
    }

    fn plastic_table() -> DistributionTable {
        DistributionTable::new(
            Decimal::new(20, 2),
            Decimal::new(10, 2),
            Decimal::new(15, 2),
            Decimal::new(50, 2),
            Decimal::new(5, 2),
            Decimal::ZERO,
        )
    }

    fn mass_with_two_recyclers() -> MassDocument {
        MassDocument::new("mass:1", Decimal::new(1000, 0), WasteSubtype::PetBottle)
            .with_event(
                ActorEvent::new(ActorRole::Source, Participant::new("part:src", "Generator"))
                    .with_origin_identified(true),
            )
            .with_event(ActorEvent::new(
                ActorRole::Hauler,
                Participant::new("part:haul", "Hauler Co"),
            ))
            .with_event(ActorEvent::new(
                ActorRole::Processor,
                Participant::new("part:proc", "Sorting Plant"),
            ))
            .with_event(ActorEvent::new(
                ActorRole::Recycler,
                Participant::new("part:rec1", "First Recycler"),
            ))
            .with_event(ActorEvent::new(
                ActorRole::Recycler,
                Participant::new("part:rec2", "Second Recycler"),
            ))
    }

    #[test]
    fn test_co_holders_split_evenly() {
        let mass = mass_with_two_recyclers();
        let roster = ActorRoster::extract(&mass).unwrap();
        let shares = AdjustmentEngine::new().role_shares(&plastic_table(), &roster);

        let rewards = expand_rewards(&mass, &shares, &roster, &methodology(), Decimal::ONE);

        let recycler_rewards: Vec<_> = rewards
            .iter()
            .filter(|r| r.actor_type == ActorRole::Recycler)
            .collect();
        assert_eq!(recycler_rewards.len(), 2);
        for reward in &recycler_rewards {
            assert_eq!(reward.weighted_percentage, Decimal::new(25, 2));
        }
        let combined: Decimal = recycler_rewards.iter().map(|r| r.weighted_percentage).sum();
        assert_eq!(combined, Decimal::new(50, 2));
    }

    #[test]
    fn test_program_roles_resolve_from_methodology() {
        let mass = mass_with_two_recyclers();
        let roster = ActorRoster::extract(&mass).unwrap();
        let shares = AdjustmentEngine::new().role_shares(&plastic_table(), &roster);

        let rewards = expand_rewards(&mass, &shares, &roster, &methodology(), Decimal::ONE);

        let network = rewards
            .iter()
            .find(|r| r.actor_type == ActorRole::Network)
            .unwrap();
        assert_eq!(network.participant.id.as_str(), "part:net");

        let ngo = rewards
            .iter()
            .find(|r| r.actor_type == ActorRole::AppointedNgo)
            .unwrap();
        assert_eq!(ngo.participant.id.as_str(), "part:ngo");
        assert_eq!(ngo.weighted_percentage, Decimal::new(10, 2));
    }

    #[test]
    fn test_absent_hauler_produces_no_record() {
        let mass = MassDocument::new("mass:2", Decimal::new(500, 0), WasteSubtype::PetBottle)
            .with_event(
                ActorEvent::new(ActorRole::Source, Participant::new("part:src", "Generator"))
                    .with_origin_identified(true),
            )
            .with_event(ActorEvent::new(
                ActorRole::Processor,
                Participant::new("part:proc", "Sorting Plant"),
            ))
            .with_event(ActorEvent::new(
                ActorRole::Recycler,
                Participant::new("part:rec", "Recycling Plant"),
            ));
        let roster = ActorRoster::extract(&mass).unwrap();
        let shares = AdjustmentEngine::new().role_shares(&plastic_table(), &roster);

        let rewards = expand_rewards(&mass, &shares, &roster, &methodology(), Decimal::ONE);
        assert!(rewards.iter().all(|r| r.actor_type != ActorRole::Hauler));

        let total: Decimal = rewards.iter().map(|r| r.weighted_percentage).sum();
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn test_weight_fraction_scales_rewards() {
        let mass = mass_with_two_recyclers();
        let roster = ActorRoster::extract(&mass).unwrap();
        let shares = AdjustmentEngine::new().role_shares(&plastic_table(), &roster);

        let fraction = Decimal::new(5, 1); // half of the certificate weight
        let rewards = expand_rewards(&mass, &shares, &roster, &methodology(), fraction);

        let total: Decimal = rewards.iter().map(|r| r.weighted_percentage).sum();
        assert_eq!(total, Decimal::new(5, 1));
    }
}
