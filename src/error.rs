//! Reward Error Codes Registry
//!
//! Error code format: RWD-{module}-{sequence}
//! - RWD-DOC: Document and roster errors
//! - RWD-TABLE: Distribution table errors
//! - RWD-CALC: Computation state errors
//!
//! Every error is terminal: the computation is pure and deterministic over
//! fixed inputs, so there is nothing to retry. The processor layer maps each
//! error into a rejection comment for the caller.

use crate::types::{ActorRole, MassId};
use thiserror::Error;

/// Reward Result type
pub type RewardResult<T> = Result<T, RewardError>;

/// Reward Error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
    // ============================================================
    // Document Errors (RWD-DOC-*)
    // ============================================================
    /// [RWD-DOC-001] Traversal yielded no mass documents
    #[error("[RWD-DOC-001] document traversal yielded no mass documents")]
    MassDocumentsNotFound,

    /// [RWD-DOC-002] Traversal yielded no methodology document
    #[error("[RWD-DOC-002] document traversal yielded no methodology definition document")]
    MethodologyDocumentNotFound,

    /// [RWD-DOC-003] Mass document has no event log
    #[error("[RWD-DOC-003] mass document {mass_id} carries no declared events")]
    NoEventsOnDocument { mass_id: MassId },

    /// [RWD-DOC-004] A mandatory role has no declared participant
    #[error(
        "[RWD-DOC-004] mass document {mass_id} is missing required actors: {}",
        join_roles(.roles)
    )]
    MissingRequiredActors {
        mass_id: MassId,
        roles: Vec<ActorRole>,
    },

    // ============================================================
    // Table Errors (RWD-TABLE-*)
    // ============================================================
    /// [RWD-TABLE-001] Subtype not covered by the table registry
    #[error("[RWD-TABLE-001] mass document {mass_id} has unexpected waste subtype {subtype}")]
    UnexpectedSubtype { mass_id: MassId, subtype: String },

    /// [RWD-TABLE-002] Table shares do not sum to 1
    #[error("[RWD-TABLE-002] distribution table for {category} sums to {sum}, expected 1")]
    InvalidTableSum { category: String, sum: String },

    /// [RWD-TABLE-003] Table is missing a role entry
    #[error("[RWD-TABLE-003] distribution table for {category} has no share for role {role}")]
    IncompleteTable { category: String, role: ActorRole },

    /// [RWD-TABLE-004] Table carries a negative share
    #[error("[RWD-TABLE-004] distribution table for {category} has negative share for role {role}")]
    NegativeShare { category: String, role: ActorRole },

    // ============================================================
    // Calculation Errors (RWD-CALC-*)
    // ============================================================
    /// [RWD-CALC-001] Total processed weight is not positive
    #[error("[RWD-CALC-001] total processed weight must be positive, got {weight}")]
    NonPositiveTotalWeight { weight: String },
}

fn join_roles(roles: &[ActorRole]) -> String {
    roles
        .iter()
        .map(ActorRole::name)
        .collect::<Vec<_>>()
        .join(", ")
}
