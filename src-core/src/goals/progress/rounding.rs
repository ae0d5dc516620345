use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero in decimal space, so 2.45 becomes 2.5 rather
/// than whatever its binary neighbour rounds to.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        // Outside Decimal's range; only reachable with absurd magnitudes
        None => value,
    }
}

/// Percentages are displayed with one decimal.
pub fn round_percent(value: f64) -> f64 {
    round_dp(value, 1)
}

/// Replaces NaN and infinities with `fallback`.
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
