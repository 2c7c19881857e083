//! Named groups of tracked titles.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::WatchlistId;

/// A named group of titles.
///
/// Watchlist names are unique. Membership is a plain set: adding a title
/// twice is rejected, and deleting a watchlist never deletes its titles.
#[derive(Debug, Clone, Serialize)]
pub struct Watchlist {
    pub id: WatchlistId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A watchlist with its member count, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistSummary {
    #[serde(flatten)]
    pub watchlist: Watchlist,
    pub title_count: i64,
}
