//! Catalog-wide summary figures.

use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate view of the catalog.
///
/// Means are over the titles that actually carry a value; `None` when no
/// title does.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_titles: i64,
    pub avg_price: Option<Decimal>,
    pub avg_rating: Option<Decimal>,
    pub unread_notifications: i64,
}
