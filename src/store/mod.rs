//! Catalog persistence with pluggable storage backends.

pub mod db;
mod memory;
pub mod model;
pub mod schema;
mod sqlite;

pub use db::{create_pool, run_migrations, DbPool, MIGRATIONS};
pub use memory::MemoryCatalog;
pub use sqlite::SqliteCatalog;

use crate::detector::DetectorConfig;
use crate::domain::{
    CatalogStats, MarketUpdate, Notification, NotificationFeedItem, NotificationId, Snapshot,
    Title, TitleDraft, TitleId, Watchlist, WatchlistId, WatchlistSummary,
};
use crate::error::Result;
use crate::pricing::CompetitorPeer;

/// Result of a committed market update.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// The title after the update.
    pub title: Title,
    /// Notifications that fired, already persisted.
    pub notifications: Vec<Notification>,
}

/// Storage operations for the title catalog.
///
/// Implementations must serialize read-modify-write of a single title's
/// price/rating fields relative to concurrent updates of the same title:
/// `record_update` commits the field update, the snapshot, and any
/// notifications as one unit or not at all.
pub trait CatalogStore: Send + Sync {
    /// Insert a title. A draft carrying a price also gets its first
    /// snapshot, atomically with the insert.
    fn add_title(&self, draft: &TitleDraft) -> Result<Title>;

    /// Get a title by id.
    fn title(&self, id: TitleId) -> Result<Option<Title>>;

    /// List all titles, most recently added first.
    fn list_titles(&self) -> Result<Vec<Title>>;

    /// Delete a title and, by cascade, its snapshots, notifications, and
    /// watchlist memberships. Returns false when the id is unknown.
    fn remove_title(&self, id: TitleId) -> Result<bool>;

    /// The title's snapshots in capture order.
    fn history(&self, id: TitleId) -> Result<Vec<Snapshot>>;

    /// All *other* titles whose category contains `tag` as a
    /// case-sensitive substring and whose current price is present.
    fn find_competitors(&self, tag: &str, exclude: TitleId) -> Result<Vec<CompetitorPeer>>;

    /// Apply a market update: merge the submitted fields, run change
    /// detection against the stored values, and commit field update +
    /// snapshot + notifications atomically.
    fn record_update(
        &self,
        id: TitleId,
        update: &MarketUpdate,
        detector: &DetectorConfig,
    ) -> Result<UpdateOutcome>;

    /// Recent notifications joined with their titles, newest first.
    fn notifications(&self, limit: i64, unread_only: bool) -> Result<Vec<NotificationFeedItem>>;

    /// Mark a notification read. Returns false when the id is unknown.
    fn mark_notification_read(&self, id: NotificationId) -> Result<bool>;

    /// Catalog-wide summary figures.
    fn stats(&self) -> Result<CatalogStats>;

    /// Create a watchlist. Duplicate names are a conflict.
    fn create_watchlist(&self, name: &str, description: &str) -> Result<Watchlist>;

    /// All watchlists with member counts, most recently created first.
    fn watchlists(&self) -> Result<Vec<WatchlistSummary>>;

    /// Titles in a watchlist, most recently added first.
    fn watchlist_titles(&self, id: WatchlistId) -> Result<Vec<Title>>;

    /// Add a title to a watchlist. Duplicate membership is a conflict.
    fn add_to_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<()>;

    /// Remove a title from a watchlist. Returns false when it was not a
    /// member.
    fn remove_from_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<bool>;

    /// Delete a watchlist and its memberships. Member titles survive.
    fn delete_watchlist(&self, id: WatchlistId) -> Result<bool>;
}
