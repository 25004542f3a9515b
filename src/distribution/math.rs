//! Truncating fixed-point arithmetic
//!
//! Reward percentages are a financial record: every multiplication and
//! division truncates (rounds toward zero) to a pinned scale immediately, so
//! results are reproducible and auditable independent of evaluation order
//! quirks or binary float drift.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept after every multiplication/division
pub const REWARD_SCALE: u32 = 10;

/// Fractional digits of the formatted certificate percentage
pub const PERCENTAGE_DISPLAY_SCALE: u32 = 4;

/// Truncate to the reward scale
pub fn trunc(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REWARD_SCALE, RoundingStrategy::ToZero)
}

/// Multiply, truncating the product
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    trunc(a * b)
}

/// Divide, truncating the quotient
///
/// Callers guarantee a non-zero divisor (co-holder counts are at least one,
/// total weight is validated positive before any division).
pub fn div(a: Decimal, b: Decimal) -> Decimal {
    trunc(a / b)
}

/// Format a fraction as a fixed four-decimal percentage string
pub fn percentage_string(fraction: Decimal) -> String {
    let scaled = (fraction * Decimal::new(100, 0))
        .round_dp_with_strategy(PERCENTAGE_DISPLAY_SCALE, RoundingStrategy::ToZero);
    format!("{scaled:.4}%")
}
