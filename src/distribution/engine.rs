//! Percentage Adjustment Engine
//!
//! Computes the final per-role percentage for one mass document from the
//! base table, the declared roster and the two traceability flags. Pure, no
//! side effects, never errors: tables are validated at registration time.
//!
//! Rule layering per role:
//! 1. Start from the base table share.
//! 2. Source discount: half of the full source share (base plus any orphaned
//!    hauler share) is withheld from the source.
//! 3. NGO split: the withheld half is routed to the appointed NGO.
//! 4. Traceability loss: with the waste origin unidentified, the source pool
//!    zeroes out and the network absorbs it plus a quarter of each physical
//!    downstream share.

use super::{math, RoleShare};
use crate::roster::ActorRoster;
use crate::table::DistributionTable;
use crate::types::ActorRole;
use rust_decimal::Decimal;

/// Percentage adjustment engine
pub struct AdjustmentEngine {
    /// Fraction of the source share withheld and routed to the NGO
    source_discount: Decimal,
    /// Fraction each physical role forfeits when traceability is lost
    traceability_forfeit: Decimal,
}

impl AdjustmentEngine {
    /// Create engine with the methodology's standard rates
    pub fn new() -> Self {
        Self {
            source_discount: Decimal::new(5, 1),       // 0.5
            traceability_forfeit: Decimal::new(25, 2), // 0.25
        }
    }

    /// Final per-mass percentage for every role
    ///
    /// Returns one share per role in canonical order, including roles with
    /// no declared holder; expansion decides which shares produce records.
    pub fn role_shares(&self, table: &DistributionTable, roster: &ActorRoster) -> Vec<RoleShare> {
        ActorRole::all()
            .into_iter()
            .map(|role| RoleShare {
                role,
                percentage: self.adjusted_share(role, table, roster),
            })
            .collect()
    }

    fn adjusted_share(
        &self,
        role: ActorRole,
        table: &DistributionTable,
        roster: &ActorRoster,
    ) -> Decimal {
        let base = table.share_for(role);
        match role {
            ActorRole::Source => math::mul(
                self.full_source_share(table, roster),
                Decimal::ONE - self.source_discount,
            ),
            ActorRole::AppointedNgo => {
                base + math::mul(self.full_source_share(table, roster), self.source_discount)
            }
            ActorRole::Network if !roster.waste_origin_identified() => {
                let mut share = base + table.share_for(ActorRole::Source) + self.source_bonus(table, roster);
                share += math::mul(self.traceability_forfeit, table.share_for(ActorRole::Processor));
                share += math::mul(self.traceability_forfeit, table.share_for(ActorRole::Recycler));
                if roster.has_hauler() {
                    share += math::mul(self.traceability_forfeit, table.share_for(ActorRole::Hauler));
                }
                share
            }
            ActorRole::Hauler | ActorRole::Processor | ActorRole::Recycler
                if !roster.waste_origin_identified() =>
            {
                math::mul(base, Decimal::ONE - self.traceability_forfeit)
            }
            _ => base,
        }
    }

    /// The source's full pool: zero when the origin is unidentified,
    /// otherwise the base share plus any orphaned hauler share.
    fn full_source_share(&self, table: &DistributionTable, roster: &ActorRoster) -> Decimal {
        if !roster.waste_origin_identified() {
            Decimal::ZERO
        } else {
            table.share_for(ActorRole::Source) + self.source_bonus(table, roster)
        }
    }

    /// With no hauler on the mass, its share folds into the source pool
    /// instead of vanishing.
    fn source_bonus(&self, table: &DistributionTable, roster: &ActorRoster) -> Decimal {
        if roster.has_hauler() {
            Decimal::ZERO
        } else {
            table.share_for(ActorRole::Hauler)
        }
    }
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActorEvent, MassDocument, Participant, WasteSubtype};

    fn table() -> DistributionTable {
        // The illustrative plastic table: 0.20/0.10/0.15/0.50/0.05/0.00
        DistributionTable::new(
            Decimal::new(20, 2),
            Decimal::new(10, 2),
            Decimal::new(15, 2),
            Decimal::new(50, 2),
            Decimal::new(5, 2),
            Decimal::ZERO,
        )
    }

    fn roster(origin_identified: bool, with_hauler: bool) -> ActorRoster {
        let mut mass = MassDocument::new("mass:1", Decimal::new(1000, 0), WasteSubtype::PetBottle)
            .with_event(
                ActorEvent::new(ActorRole::Source, Participant::new("part:src", "Generator"))
                    .with_origin_identified(origin_identified),
            )
            .with_event(ActorEvent::new(
                ActorRole::Processor,
                Participant::new("part:proc", "Sorting Plant"),
            ))
            .with_event(ActorEvent::new(
                ActorRole::Recycler,
                Participant::new("part:rec", "Recycling Plant"),
            ));
        if with_hauler {
            mass = mass.with_event(ActorEvent::new(
                ActorRole::Hauler,
                Participant::new("part:haul", "Hauler Co"),
            ));
        }
        ActorRoster::extract(&mass).unwrap()
    }

    fn share_for(shares: &[RoleShare], role: ActorRole) -> Decimal {
        shares.iter().find(|s| s.role == role).unwrap().percentage
    }

    fn emitted_sum(shares: &[RoleShare], roster: &ActorRoster) -> Decimal {
        shares
            .iter()
            .filter(|s| match s.role {
                ActorRole::Network | ActorRole::AppointedNgo => true,
                physical => roster.holder_count(physical) > 0,
            })
            .map(|s| s.percentage)
            .sum()
    }

    #[test]
    fn test_origin_identified_hauler_present() {
        let engine = AdjustmentEngine::new();
        let roster = roster(true, true);
        let shares = engine.role_shares(&table(), &roster);

        assert_eq!(share_for(&shares, ActorRole::Source), Decimal::new(10, 2));
        assert_eq!(share_for(&shares, ActorRole::AppointedNgo), Decimal::new(10, 2));
        assert_eq!(share_for(&shares, ActorRole::Hauler), Decimal::new(10, 2));
        assert_eq!(share_for(&shares, ActorRole::Processor), Decimal::new(15, 2));
        assert_eq!(share_for(&shares, ActorRole::Recycler), Decimal::new(50, 2));
        assert_eq!(share_for(&shares, ActorRole::Network), Decimal::new(5, 2));
        assert_eq!(emitted_sum(&shares, &roster), Decimal::ONE);
    }

    #[test]
    fn test_origin_identified_no_hauler_folds_share_into_source_pool() {
        let engine = AdjustmentEngine::new();
        let roster = roster(true, false);
        let shares = engine.role_shares(&table(), &roster);

        // Source pool becomes 0.20 + 0.10, split evenly with the NGO.
        assert_eq!(share_for(&shares, ActorRole::Source), Decimal::new(15, 2));
        assert_eq!(share_for(&shares, ActorRole::AppointedNgo), Decimal::new(15, 2));
        assert_eq!(share_for(&shares, ActorRole::Processor), Decimal::new(15, 2));
        assert_eq!(share_for(&shares, ActorRole::Recycler), Decimal::new(50, 2));
        assert_eq!(share_for(&shares, ActorRole::Network), Decimal::new(5, 2));
        assert_eq!(emitted_sum(&shares, &roster), Decimal::ONE);
    }

    #[test]
    fn test_origin_lost_no_hauler_network_absorbs() {
        let engine = AdjustmentEngine::new();
        let roster = roster(false, false);
        let shares = engine.role_shares(&table(), &roster);

        assert_eq!(share_for(&shares, ActorRole::Source), Decimal::ZERO);
        assert_eq!(share_for(&shares, ActorRole::AppointedNgo), Decimal::ZERO);
        // 0.05 + 0.20 + 0.10 + 0.0375 + 0.125
        assert_eq!(share_for(&shares, ActorRole::Network), Decimal::new(5125, 4));
        assert_eq!(share_for(&shares, ActorRole::Processor), Decimal::new(1125, 4));
        assert_eq!(share_for(&shares, ActorRole::Recycler), Decimal::new(375, 3));
        assert_eq!(emitted_sum(&shares, &roster), Decimal::ONE);
    }

    #[test]
    fn test_origin_lost_hauler_present_forfeits_quarter() {
        let engine = AdjustmentEngine::new();
        let roster = roster(false, true);
        let shares = engine.role_shares(&table(), &roster);

        assert_eq!(share_for(&shares, ActorRole::Source), Decimal::ZERO);
        assert_eq!(share_for(&shares, ActorRole::Hauler), Decimal::new(75, 3));
        // 0.05 + 0.20 + 0 + 0.0375 + 0.125 + 0.025
        assert_eq!(share_for(&shares, ActorRole::Network), Decimal::new(4375, 4));
        assert_eq!(emitted_sum(&shares, &roster), Decimal::ONE);
    }

    #[test]
    fn test_emitted_sum_holds_across_every_branch() {
        let engine = AdjustmentEngine::new();
        for origin in [true, false] {
            for hauler in [true, false] {
                let roster = roster(origin, hauler);
                let shares = engine.role_shares(&table(), &roster);
                assert_eq!(
                    emitted_sum(&shares, &roster),
                    Decimal::ONE,
                    "origin={origin} hauler={hauler}"
                );
            }
        }
    }
}
