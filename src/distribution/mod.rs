//! Reward Distribution
//!
//! Per-mass share computation:
//! - Percentage adjustment (source discount, NGO split, traceability loss)
//! - Expansion of role shares into per-participant reward records
//! - Pinned truncating fixed-point arithmetic

pub mod math;

mod engine;
mod expand;

pub use engine::*;
pub use expand::*;

use crate::types::ActorRole;
use rust_decimal::Decimal;

/// Final per-mass percentage for one role, before co-holder split
#[derive(Clone, Debug, PartialEq)]
pub struct RoleShare {
    pub role: ActorRole,
    pub percentage: Decimal,
}
