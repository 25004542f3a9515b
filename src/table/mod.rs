//! Distribution Table Registry
//!
//! Maps a mass document's waste sub-type (through its category) to the base
//! percentage table keyed by actor role. Tables are configuration data,
//! versioned with the methodology, and validated at registration time:
//! shares must be non-negative and sum to exactly 1, and every role must be
//! present. An unhandled role is a load-time error, never a silent zero.

use crate::error::{RewardError, RewardResult};
use crate::types::{ActorRole, MassDocument, WasteCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base percentage table for one waste category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionTable {
    pub source: Decimal,
    pub hauler: Decimal,
    pub processor: Decimal,
    pub recycler: Decimal,
    pub network: Decimal,
    pub appointed_ngo: Decimal,
}

impl DistributionTable {
    pub fn new(
        source: Decimal,
        hauler: Decimal,
        processor: Decimal,
        recycler: Decimal,
        network: Decimal,
        appointed_ngo: Decimal,
    ) -> Self {
        Self {
            source,
            hauler,
            processor,
            recycler,
            network,
            appointed_ngo,
        }
    }

    /// Build from a role-keyed map, failing on missing roles
    ///
    /// Used at the configuration boundary where tables arrive as loose maps.
    pub fn from_shares(
        category: WasteCategory,
        shares: &HashMap<ActorRole, Decimal>,
    ) -> RewardResult<Self> {
        let get = |role: ActorRole| -> RewardResult<Decimal> {
            shares
                .get(&role)
                .copied()
                .ok_or_else(|| RewardError::IncompleteTable {
                    category: category.name().to_string(),
                    role,
                })
        };
        Ok(Self {
            source: get(ActorRole::Source)?,
            hauler: get(ActorRole::Hauler)?,
            processor: get(ActorRole::Processor)?,
            recycler: get(ActorRole::Recycler)?,
            network: get(ActorRole::Network)?,
            appointed_ngo: get(ActorRole::AppointedNgo)?,
        })
    }

    /// Base share for a role (exhaustive by construction)
    pub fn share_for(&self, role: ActorRole) -> Decimal {
        match role {
            ActorRole::Source => self.source,
            ActorRole::Hauler => self.hauler,
            ActorRole::Processor => self.processor,
            ActorRole::Recycler => self.recycler,
            ActorRole::Network => self.network,
            ActorRole::AppointedNgo => self.appointed_ngo,
        }
    }

    /// Sum of all shares
    pub fn total(&self) -> Decimal {
        ActorRole::all()
            .into_iter()
            .map(|role| self.share_for(role))
            .sum()
    }

    /// Validate shares: non-negative, summing to exactly 1
    pub fn validate(&self, category: WasteCategory) -> RewardResult<()> {
        for role in ActorRole::all() {
            if self.share_for(role) < Decimal::ZERO {
                return Err(RewardError::NegativeShare {
                    category: category.name().to_string(),
                    role,
                });
            }
        }
        let total = self.total();
        if total != Decimal::ONE {
            return Err(RewardError::InvalidTableSum {
                category: category.name().to_string(),
                sum: total.to_string(),
            });
        }
        Ok(())
    }
}

/// Versioned registry of distribution tables, keyed by waste category
#[derive(Clone, Debug)]
pub struct TableRegistry {
    version: String,
    tables: HashMap<WasteCategory, DistributionTable>,
}

impl TableRegistry {
    /// Create empty registry
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            tables: HashMap::new(),
        }
    }

    /// Registry with the default v1 tables for every category
    pub fn with_default_v1() -> Self {
        let mut registry = Self::new("v1");
        registry.register_default_v1();
        registry
    }

    fn register_default_v1(&mut self) {
        let d = |value: i64, scale: u32| Decimal::new(value, scale);
        let defaults = [
            (
                WasteCategory::Plastic,
                DistributionTable::new(d(20, 2), d(10, 2), d(15, 2), d(50, 2), d(5, 2), Decimal::ZERO),
            ),
            (
                WasteCategory::Metal,
                DistributionTable::new(d(25, 2), d(10, 2), d(20, 2), d(40, 2), d(5, 2), Decimal::ZERO),
            ),
            (
                WasteCategory::Paper,
                DistributionTable::new(d(15, 2), d(10, 2), d(20, 2), d(50, 2), d(5, 2), Decimal::ZERO),
            ),
            (
                WasteCategory::Glass,
                DistributionTable::new(d(20, 2), d(15, 2), d(20, 2), d(40, 2), d(5, 2), Decimal::ZERO),
            ),
        ];
        for (category, table) in defaults {
            // Default tables are self-consistent; registration cannot fail.
            self.register(category, table).ok();
        }
    }

    /// Register a table, validating it first
    pub fn register(
        &mut self,
        category: WasteCategory,
        table: DistributionTable,
    ) -> RewardResult<()> {
        table.validate(category)?;
        self.tables.insert(category, table);
        Ok(())
    }

    /// Resolve the table for a mass document's sub-type
    pub fn resolve(&self, mass: &MassDocument) -> RewardResult<&DistributionTable> {
        self.tables
            .get(&mass.subtype.category())
            .ok_or_else(|| RewardError::UnexpectedSubtype {
                mass_id: mass.id.clone(),
                subtype: mass.subtype.name().to_string(),
            })
    }

    /// Registry version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::with_default_v1()
    }
}
