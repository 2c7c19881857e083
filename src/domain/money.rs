//! Monetary and rating types for price tracking.

use rust_decimal::{Decimal, RoundingStrategy};

/// List price represented as a Decimal for precision.
pub type Price = Decimal;

/// Reader rating on a 0-5 scale, kept as a Decimal so threshold
/// comparisons are exact.
pub type Rating = Decimal;

/// Round a currency amount to cents.
///
/// Applied at output boundaries only; internal math keeps full precision.
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a rating to one decimal place for display.
#[must_use]
pub fn round_tenths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_cents_is_commercial_rounding() {
        assert_eq!(round_cents(dec!(4.005)), dec!(4.01));
        assert_eq!(round_cents(dec!(4.004)), dec!(4.00));
        assert_eq!(round_cents(dec!(4.4485)), dec!(4.45));
    }

    #[test]
    fn round_tenths_for_ratings() {
        assert_eq!(round_tenths(dec!(4.25)), dec!(4.3));
        assert_eq!(round_tenths(dec!(4.24)), dec!(4.2));
    }
}
