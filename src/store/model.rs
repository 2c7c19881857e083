//! Database row types for Diesel ORM.
//!
//! Prices, ratings, and timestamps are persisted as text: decimals
//! round-trip exactly and RFC 3339 timestamps sort lexicographically.

use diesel::prelude::*;

use super::schema::{notifications, snapshots, titles, watchlist_titles, watchlists};

/// Database row for a title (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = titles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TitleRow {
    pub id: i32,
    pub external_id: Option<String>,
    pub name: String,
    pub author: String,
    pub current_price: Option<String>,
    pub rating: Option<String>,
    pub rating_count: i32,
    pub page_count: Option<i32>,
    pub category: String,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub added_at: String,
    pub updated_at: String,
}

/// Database row for a title (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = titles)]
pub struct NewTitleRow {
    pub external_id: Option<String>,
    pub name: String,
    pub author: String,
    pub current_price: Option<String>,
    pub rating: Option<String>,
    pub rating_count: i32,
    pub page_count: Option<i32>,
    pub category: String,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub added_at: String,
    pub updated_at: String,
}

/// Database row for a snapshot (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotRow {
    pub id: i32,
    pub title_id: i32,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub rating_count: i32,
    pub captured_at: String,
}

/// Database row for a snapshot (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = snapshots)]
pub struct NewSnapshotRow {
    pub title_id: i32,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub rating_count: i32,
    pub captured_at: String,
}

/// Database row for a notification (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NotificationRow {
    pub id: i32,
    pub title_id: i32,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: String,
}

/// Database row for a notification (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = notifications)]
pub struct NewNotificationRow {
    pub title_id: i32,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: String,
}

/// Database row for a watchlist (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = watchlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WatchlistRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

/// Database row for a watchlist (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = watchlists)]
pub struct NewWatchlistRow {
    pub name: String,
    pub description: String,
    pub created_at: String,
}

/// Database row for watchlist membership.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = watchlist_titles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WatchlistTitleRow {
    pub watchlist_id: i32,
    pub title_id: i32,
    pub added_at: String,
}
