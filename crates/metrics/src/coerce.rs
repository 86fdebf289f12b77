//! Input coercion and rounding helpers shared by the calculators.
//!
//! The intake forms can hand the engine anything; the contract is that bad
//! numbers become zero, never an error.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Coerces a monetary input: negative amounts become zero.
pub fn money(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

/// Coerces a count input: negative counts become zero.
pub fn count(n: i64) -> i64 {
    n.max(0)
}

/// Rounds a monetary amount to a whole non-negative rupee value.
///
/// Midpoints round away from zero, matching the half-up rounding the
/// persisted historical rows were produced with.
pub fn round_money(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
        .max(0)
}
