//! Rewards Core - Reward Distribution for Recycling Chain Audits
//!
//! This crate computes how the economic reward attached to a recycling
//! certificate is split among the participants who touched each weighed
//! batch of waste (a "mass document"). It provides:
//! - **Resolution**: Waste sub-type -> base percentage table per actor role
//! - **Validation**: Event log and mandatory role guards per mass
//! - **Adjustment**: Layered business rules over the base percentages
//! - **Aggregation**: Per-mass breakdown and per-certificate totals
//!
//! # Invariants
//!
//! | Invariant | Core Requirement |
//! |-----------|------------------|
//! | **Table Soundness** | Every registered table sums to exactly 1, all roles present |
//! | **Mass Conservation** | Emitted role shares on one mass sum to 1 under every rule branch |
//! | **Certificate Cap** | Certificate totals sum to 100%, no participant exceeds 100% |
//! | **Determinism** | Truncating fixed-point arithmetic, byte-identical reruns |
//! | **All-or-Nothing** | Any validation error rejects the whole request, no partial results |
//!
//! # Data Flow
//!
//! ```text
//! DocumentSource (external traversal)
//!        │ drain once per request
//!        ▼
//! partition ──► { mass documents, methodology }
//!        │ per mass
//!        ▼
//! ActorRoster ──► TableRegistry ──► AdjustmentEngine ──► expand_rewards
//!        │                                                     │
//!        ▼                                                     ▼
//! guard_required_roles                          flat ActorReward list
//!                                               ┌───────────┴───────────┐
//!                                               ▼                       ▼
//!                                         group_by_mass      aggregate_certificate
//! ```
//!
//! The engine is stateless, synchronous and request-scoped: no operation
//! suspends, blocks on I/O, or shares mutable state between requests.

pub mod aggregate;
pub mod distribution;
pub mod error;
pub mod graph;
pub mod processor;
pub mod roster;
pub mod table;
pub mod types;

// Re-export error types
pub use error::{RewardError, RewardResult};

// Re-export all types
pub use types::*;

// Re-export tables
pub use table::{DistributionTable, TableRegistry};

// Re-export roster
pub use roster::{ActorRoster, RosterEntry};

// Re-export distribution
pub use distribution::{expand_rewards, AdjustmentEngine, RoleShare};

// Re-export aggregation
pub use aggregate::{aggregate_certificate, group_by_mass};

// Re-export graph interface
pub use graph::{
    partition, DocumentBatch, DocumentKind, DocumentSource, GraphDocument, InMemorySource,
};

// Re-export processors
pub use processor::{
    EvaluableCertificate, PreparedMass, ProcessorResponse, RewardDistributionProcessor,
    RuleProcessor,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Distribution table configuration version shipped by default
pub const DEFAULT_TABLES_VERSION: &str = "v1";
