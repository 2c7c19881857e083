//! Timestamped captures of a title's market position.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::TitleId;
use super::money::{Price, Rating};

/// A point-in-time capture of a title's price, rating, and rating count.
///
/// Snapshots are append-only: one is written on every market update (and on
/// add, when the title arrives with a price), regardless of whether a
/// notification fires. They are removed only when the owning title is
/// removed. Ordered by `captured_at`, the sequence is the sole history of a
/// title's market position.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub id: i32,
    pub title_id: TitleId,
    pub price: Option<Price>,
    pub rating: Option<Rating>,
    pub rating_count: i32,
    pub captured_at: DateTime<Utc>,
}
