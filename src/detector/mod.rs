//! Significant-change detection for price and rating updates.
//!
//! The detector is a pure function over the previous and newly-submitted
//! values; persistence of the resulting notifications (and of the snapshot
//! that always accompanies an update) belongs to the store.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::domain::{
    round_cents, round_tenths, NotificationKind, PendingNotification, Price, Rating,
};

/// Thresholds for what counts as a significant movement.
///
/// The defaults are intentional business rules: a price must move by more
/// than $0.50 (strict), a rating by at least 0.3 (inclusive).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub price_threshold: Decimal,
    pub rating_threshold: Decimal,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            price_threshold: dec!(0.5),
            rating_threshold: dec!(0.3),
        }
    }
}

/// Compare previous and new price/rating and emit pending notifications.
///
/// Each rule is independent; zero, one, or both may fire on a single
/// update. A missing value on either side of a comparison means "no prior
/// signal" and suppresses that rule - absence is never treated as zero.
#[must_use]
pub fn detect_changes(
    old_price: Option<Price>,
    new_price: Option<Price>,
    old_rating: Option<Rating>,
    new_rating: Option<Rating>,
    config: &DetectorConfig,
) -> Vec<PendingNotification> {
    let mut pending = Vec::new();

    if let (Some(old), Some(new)) = (old_price, new_price) {
        if (old - new).abs() > config.price_threshold {
            let direction = if new > old { "increase" } else { "decrease" };
            pending.push(PendingNotification {
                kind: NotificationKind::PriceChange,
                message: format!(
                    "Price {direction}: ${:.2} → ${:.2}",
                    round_cents(old),
                    round_cents(new)
                ),
            });
        }
    }

    if let (Some(old), Some(new)) = (old_rating, new_rating) {
        if (old - new).abs() >= config.rating_threshold {
            let direction = if new > old { "increased" } else { "decreased" };
            pending.push(PendingNotification {
                kind: NotificationKind::RatingChange,
                message: format!(
                    "Rating {direction}: {:.1} → {:.1}",
                    round_tenths(old),
                    round_tenths(new)
                ),
            });
        }
    }

    pending
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(
        old_price: Option<Decimal>,
        new_price: Option<Decimal>,
        old_rating: Option<Decimal>,
        new_rating: Option<Decimal>,
    ) -> Vec<PendingNotification> {
        detect_changes(
            old_price,
            new_price,
            old_rating,
            new_rating,
            &DetectorConfig::default(),
        )
    }

    #[test]
    fn price_delta_at_threshold_does_not_fire() {
        // |10.00 - 10.40| = 0.40, under the 0.50 threshold
        let pending = detect(Some(dec!(10.00)), Some(dec!(10.40)), None, None);
        assert!(pending.is_empty());

        // exactly 0.50 is still not significant (strict comparison)
        let pending = detect(Some(dec!(10.00)), Some(dec!(10.50)), None, None);
        assert!(pending.is_empty());
    }

    #[test]
    fn price_increase_fires_with_formatted_message() {
        let pending = detect(Some(dec!(10.00)), Some(dec!(10.60)), None, None);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].kind, NotificationKind::PriceChange);
        assert_eq!(pending[0].message, "Price increase: $10.00 → $10.60");
    }

    #[test]
    fn price_decrease_fires_with_formatted_message() {
        let pending = detect(Some(dec!(5.99)), Some(dec!(2.99)), None, None);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].message, "Price decrease: $5.99 → $2.99");
    }

    #[test]
    fn rating_threshold_is_inclusive() {
        // delta exactly 0.3 fires
        let pending = detect(None, None, Some(dec!(4.0)), Some(dec!(4.3)));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].kind, NotificationKind::RatingChange);
        assert_eq!(pending[0].message, "Rating increased: 4.0 → 4.3");

        // delta 0.29 does not
        let pending = detect(None, None, Some(dec!(4.0)), Some(dec!(4.29)));
        assert!(pending.is_empty());
    }

    #[test]
    fn rating_decrease_message() {
        let pending = detect(None, None, Some(dec!(4.5)), Some(dec!(4.1)));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].message, "Rating decreased: 4.5 → 4.1");
    }

    #[test]
    fn both_rules_fire_independently_on_one_update() {
        let pending = detect(
            Some(dec!(10.00)),
            Some(dec!(12.00)),
            Some(dec!(3.0)),
            Some(dec!(4.0)),
        );
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].kind, NotificationKind::PriceChange);
        assert_eq!(pending[1].kind, NotificationKind::RatingChange);
    }

    #[test]
    fn missing_history_never_fires() {
        assert!(detect(None, Some(dec!(9.99)), None, Some(dec!(4.9))).is_empty());
        assert!(detect(Some(dec!(9.99)), None, Some(dec!(4.9)), None).is_empty());
        assert!(detect(None, None, None, None).is_empty());
    }

    #[test]
    fn zero_is_a_present_value_not_missing_history() {
        let pending = detect(Some(dec!(0)), Some(dec!(1.99)), None, None);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].message, "Price increase: $0.00 → $1.99");
    }
}
