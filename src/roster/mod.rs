//! Actor Roster Extraction and Validation Guard
//!
//! Scans a mass document's event log into the set of declared
//! (role, participant) pairs, plus the two derived flags the adjustment
//! rules branch on: whether the waste origin was identified and whether a
//! hauler touched the mass.
//!
//! One roster per mass document, rebuilt per computation, never persisted.

use crate::error::{RewardError, RewardResult};
use crate::types::{ActorRole, MassDocument, Participant};
use std::collections::HashSet;

/// One declared (role, participant) pair
#[derive(Clone, Debug, PartialEq)]
pub struct RosterEntry {
    pub role: ActorRole,
    pub participant: Participant,
}

/// Declared actors on one mass document
#[derive(Clone, Debug)]
pub struct ActorRoster {
    entries: Vec<RosterEntry>,
    waste_origin_identified: bool,
    has_hauler: bool,
}

impl ActorRoster {
    /// Extract the roster from a mass document's event log
    ///
    /// Fails with `NoEventsOnDocument` when the log is empty. Duplicate
    /// (role, participant) declarations collapse into one entry.
    pub fn extract(mass: &MassDocument) -> RewardResult<Self> {
        if mass.events.is_empty() {
            return Err(RewardError::NoEventsOnDocument {
                mass_id: mass.id.clone(),
            });
        }

        let mut entries = Vec::new();
        let mut seen: HashSet<(ActorRole, &str)> = HashSet::new();
        for event in &mass.events {
            if seen.insert((event.role, event.participant.id.as_str())) {
                entries.push(RosterEntry {
                    role: event.role,
                    participant: event.participant.clone(),
                });
            }
        }

        // The traceability flag lives on the source-role event.
        let waste_origin_identified = mass
            .events
            .iter()
            .filter(|event| event.role == ActorRole::Source)
            .any(|event| event.waste_origin_identified == Some(true));

        let has_hauler = entries.iter().any(|entry| entry.role == ActorRole::Hauler);

        Ok(Self {
            entries,
            waste_origin_identified,
            has_hauler,
        })
    }

    /// Assert every mandatory role has at least one declared participant
    ///
    /// Hauler is optional: its absence is a legitimate business state.
    pub fn guard_required_roles(&self, mass: &MassDocument) -> RewardResult<()> {
        let missing: Vec<ActorRole> = ActorRole::required()
            .into_iter()
            .filter(|role| self.holder_count(*role) == 0)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RewardError::MissingRequiredActors {
                mass_id: mass.id.clone(),
                roles: missing,
            })
        }
    }

    /// Participants declared for a role, in declaration order
    pub fn participants_for(&self, role: ActorRole) -> Vec<&Participant> {
        self.entries
            .iter()
            .filter(|entry| entry.role == role)
            .map(|entry| &entry.participant)
            .collect()
    }

    /// Number of distinct participants holding a role
    pub fn holder_count(&self, role: ActorRole) -> usize {
        self.entries.iter().filter(|entry| entry.role == role).count()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn waste_origin_identified(&self) -> bool {
        self.waste_origin_identified
    }

    pub fn has_hauler(&self) -> bool {
        self.has_hauler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActorEvent, WasteSubtype};
    use rust_decimal::Decimal;

    fn base_mass() -> MassDocument {
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
                Participant::new("part:rec", "Recycling Plant"),
            ))
    }

    #[test]
    fn test_extract_full_roster() {
        let roster = ActorRoster::extract(&base_mass()).unwrap();
        assert_eq!(roster.entries().len(), 4);
        assert!(roster.waste_origin_identified());
        assert!(roster.has_hauler());
        assert_eq!(roster.holder_count(ActorRole::Recycler), 1);
    }

    #[test]
    fn test_extract_empty_log_fails() {
        let mass = MassDocument::new("mass:2", Decimal::new(500, 0), WasteSubtype::GlassCullet);
        let err = ActorRoster::extract(&mass).unwrap_err();
        assert!(matches!(err, RewardError::NoEventsOnDocument { .. }));
    }

    #[test]
    fn test_duplicate_declarations_collapse() {
        let mass = base_mass().with_event(ActorEvent::new(
            ActorRole::Recycler,
            Participant::new("part:rec", "Recycling Plant"),
        ));
        let roster = ActorRoster::extract(&mass).unwrap();
        assert_eq!(roster.holder_count(ActorRole::Recycler), 1);
    }

    #[test]
    fn test_origin_flag_defaults_to_unidentified() {
        let mass = MassDocument::new("mass:3", Decimal::new(100, 0), WasteSubtype::MixedPaper)
            .with_event(ActorEvent::new(
                ActorRole::Source,
                Participant::new("part:src", "Generator"),
            ))
            .with_event(ActorEvent::new(
                ActorRole::Processor,
                Participant::new("part:proc", "Sorting Plant"),
            ))
            .with_event(ActorEvent::new(
                ActorRole::Recycler,
                Participant::new("part:rec", "Recycling Plant"),
            ));
        let roster = ActorRoster::extract(&mass).unwrap();
        assert!(!roster.waste_origin_identified());
        assert!(!roster.has_hauler());
        assert!(roster.guard_required_roles(&mass).is_ok());
    }

    #[test]
    fn test_guard_reports_missing_roles() {
        let mass = MassDocument::new("mass:4", Decimal::new(100, 0), WasteSubtype::PetBottle)
            .with_event(
                ActorEvent::new(ActorRole::Source, Participant::new("part:src", "Generator"))
                    .with_origin_identified(true),
            );
        let roster = ActorRoster::extract(&mass).unwrap();
        let err = roster.guard_required_roles(&mass).unwrap_err();
        match err {
            RewardError::MissingRequiredActors { roles, .. } => {
                assert_eq!(roles, vec![ActorRole::Processor, ActorRole::Recycler]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_co_holders_are_counted() {
        let mass = base_mass().with_event(ActorEvent::new(
            ActorRole::Recycler,
            Participant::new("part:rec2", "Second Recycler"),
        ));
        let roster = ActorRoster::extract(&mass).unwrap();
        assert_eq!(roster.holder_count(ActorRole::Recycler), 2);
        let holders = roster.participants_for(ActorRole::Recycler);
        assert_eq!(holders[0].id.as_str(), "part:rec");
        assert_eq!(holders[1].id.as_str(), "part:rec2");
    }
}
