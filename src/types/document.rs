//! Supply chain documents
//!
//! A mass document records one physically weighed batch of recyclable waste
//! together with the chain events declared on it. The methodology document
//! carries the program-level participants (platform network and appointed
//! NGO), which are never declared on individual masses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================
// Identifiers (newtype pattern, non-interchangeable)
// ============================================================

/// Mass document identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MassId(String);

impl MassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participant identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A supply chain participant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: name.into(),
        }
    }
}

// ============================================================
// Roles
// ============================================================

/// Supply chain role of a participant
///
/// Physical roles are declared per mass; Network and AppointedNgo are
/// program-level and resolved from the methodology document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRole {
    /// Waste generator
    Source,
    /// Transport between chain stages
    Hauler,
    /// Sorting / pre-processing facility
    Processor,
    /// Final recycling facility
    Recycler,
    /// Platform operator
    Network,
    /// Methodology-selected non-profit beneficiary
    AppointedNgo,
}

impl ActorRole {
    /// All roles, in canonical order
    pub fn all() -> Vec<ActorRole> {
        vec![
            ActorRole::Source,
            ActorRole::Hauler,
            ActorRole::Processor,
            ActorRole::Recycler,
            ActorRole::Network,
            ActorRole::AppointedNgo,
        ]
    }

    /// Roles that must be declared on every mass document
    ///
    /// Hauler is deliberately absent: a mass with no hauler is a legitimate
    /// business state, not a validation failure.
    pub fn required() -> Vec<ActorRole> {
        vec![ActorRole::Source, ActorRole::Processor, ActorRole::Recycler]
    }

    /// Whether the role is physically declared on mass documents
    pub fn is_physical(&self) -> bool {
        !matches!(self, ActorRole::Network | ActorRole::AppointedNgo)
    }

    /// Get role name
    pub fn name(&self) -> &'static str {
        match self {
            ActorRole::Source => "SOURCE",
            ActorRole::Hauler => "HAULER",
            ActorRole::Processor => "PROCESSOR",
            ActorRole::Recycler => "RECYCLER",
            ActorRole::Network => "NETWORK",
            ActorRole::AppointedNgo => "APPOINTED_NGO",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================
// Waste classification
// ============================================================

/// Waste category, keys the distribution table registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    Plastic,
    Metal,
    Paper,
    Glass,
}

impl WasteCategory {
    pub fn all() -> Vec<WasteCategory> {
        vec![
            WasteCategory::Plastic,
            WasteCategory::Metal,
            WasteCategory::Paper,
            WasteCategory::Glass,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            WasteCategory::Plastic => "plastic",
            WasteCategory::Metal => "metal",
            WasteCategory::Paper => "paper",
            WasteCategory::Glass => "glass",
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Waste sub-type carried by a mass document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteSubtype {
    MixedPlastic,
    PetBottle,
    HdpeRigid,
    FerrousScrap,
    AluminumCan,
    CardboardBale,
    MixedPaper,
    GlassCullet,
}

impl WasteSubtype {
    /// Category used for distribution table lookup (exhaustive by design)
    pub fn category(&self) -> WasteCategory {
        match self {
            WasteSubtype::MixedPlastic | WasteSubtype::PetBottle | WasteSubtype::HdpeRigid => {
                WasteCategory::Plastic
            }
            WasteSubtype::FerrousScrap | WasteSubtype::AluminumCan => WasteCategory::Metal,
            WasteSubtype::CardboardBale | WasteSubtype::MixedPaper => WasteCategory::Paper,
            WasteSubtype::GlassCullet => WasteCategory::Glass,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WasteSubtype::MixedPlastic => "mixed_plastic",
            WasteSubtype::PetBottle => "pet_bottle",
            WasteSubtype::HdpeRigid => "hdpe_rigid",
            WasteSubtype::FerrousScrap => "ferrous_scrap",
            WasteSubtype::AluminumCan => "aluminum_can",
            WasteSubtype::CardboardBale => "cardboard_bale",
            WasteSubtype::MixedPaper => "mixed_paper",
            WasteSubtype::GlassCullet => "glass_cullet",
        }
    }
}

impl std::fmt::Display for WasteSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WasteSubtype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mixed_plastic" => Ok(WasteSubtype::MixedPlastic),
            "pet_bottle" => Ok(WasteSubtype::PetBottle),
            "hdpe_rigid" => Ok(WasteSubtype::HdpeRigid),
            "ferrous_scrap" => Ok(WasteSubtype::FerrousScrap),
            "aluminum_can" => Ok(WasteSubtype::AluminumCan),
            "cardboard_bale" => Ok(WasteSubtype::CardboardBale),
            "mixed_paper" => Ok(WasteSubtype::MixedPaper),
            "glass_cullet" => Ok(WasteSubtype::GlassCullet),
            other => Err(format!("unknown waste subtype: {other}")),
        }
    }
}

// ============================================================
// Documents
// ============================================================

/// One declared chain event on a mass document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorEvent {
    pub role: ActorRole,
    pub participant: Participant,
    /// Traceability flag, only meaningful on the source-role event
    pub waste_origin_identified: Option<bool>,
    pub declared_at: DateTime<Utc>,
}

impl ActorEvent {
    pub fn new(role: ActorRole, participant: Participant) -> Self {
        Self {
            role,
            participant,
            waste_origin_identified: None,
            declared_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Set the traceability flag
    pub fn with_origin_identified(mut self, identified: bool) -> Self {
        self.waste_origin_identified = Some(identified);
        self
    }

    /// Set the declaration timestamp
    pub fn with_declared_at(mut self, at: DateTime<Utc>) -> Self {
        self.declared_at = at;
        self
    }
}

/// A record of one physically weighed batch of recyclable waste
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MassDocument {
    pub id: MassId,
    /// Processed weight; `weight > 0` is enforced at the ingestion boundary
    pub weight: Decimal,
    pub subtype: WasteSubtype,
    pub events: Vec<ActorEvent>,
}

impl MassDocument {
    pub fn new(id: impl Into<String>, weight: Decimal, subtype: WasteSubtype) -> Self {
        Self {
            id: MassId::new(id),
            weight,
            subtype,
            events: Vec::new(),
        }
    }

    /// Append a declared event
    pub fn with_event(mut self, event: ActorEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// Methodology definition document
///
/// Carries the program-level participants. Both are mandatory: the
/// adjustment rules route shares to them, so a methodology without them
/// would silently drop value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodologyDocument {
    pub id: String,
    pub network: Participant,
    pub appointed_ngo: Participant,
}

impl MethodologyDocument {
    pub fn new(id: impl Into<String>, network: Participant, appointed_ngo: Participant) -> Self {
        Self {
            id: id.into(),
            network,
            appointed_ngo,
        }
    }

    /// Participant holding a program-level role
    pub fn participant_for(&self, role: ActorRole) -> Option<&Participant> {
        match role {
            ActorRole::Network => Some(&self.network),
            ActorRole::AppointedNgo => Some(&self.appointed_ngo),
            _ => None,
        }
    }
}
