//! SQLite catalog implementation using Diesel.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sql_types::Integer;
use rust_decimal::Decimal;
use tracing::debug;

use super::db::DbPool;
use super::model::{
    NewNotificationRow, NewSnapshotRow, NewTitleRow, NewWatchlistRow, NotificationRow,
    SnapshotRow, TitleRow, WatchlistRow, WatchlistTitleRow,
};
use super::schema::{notifications, snapshots, titles, watchlist_titles, watchlists};
use super::{CatalogStore, UpdateOutcome};
use crate::detector::{detect_changes, DetectorConfig};
use crate::domain::{
    round_cents, CatalogStats, MarketUpdate, Notification, NotificationFeedItem, NotificationId,
    NotificationKind, Snapshot, Title, TitleDraft, TitleId, Watchlist, WatchlistId,
    WatchlistSummary,
};
use crate::error::{Error, Result};
use crate::pricing::CompetitorPeer;

diesel::define_sql_function! {
    fn last_insert_rowid() -> Integer;
}

/// SQLite-backed catalog store.
pub struct SqliteCatalog {
    pool: DbPool,
}

impl SqliteCatalog {
    /// Create a new SQLite catalog store.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    fn title_from_row(row: TitleRow) -> Result<Title> {
        Ok(Title {
            id: TitleId::new(row.id),
            external_id: row.external_id,
            name: row.name,
            author: row.author,
            current_price: parse_decimal(row.current_price.as_deref())?,
            rating: parse_decimal(row.rating.as_deref())?,
            rating_count: row.rating_count,
            page_count: row.page_count,
            category: row.category,
            publisher: row.publisher,
            published_date: row.published_date,
            added_at: parse_timestamp(&row.added_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }

    fn snapshot_from_row(row: SnapshotRow) -> Result<Snapshot> {
        Ok(Snapshot {
            id: row.id,
            title_id: TitleId::new(row.title_id),
            price: parse_decimal(row.price.as_deref())?,
            rating: parse_decimal(row.rating.as_deref())?,
            rating_count: row.rating_count,
            captured_at: parse_timestamp(&row.captured_at)?,
        })
    }

    fn notification_from_row(row: NotificationRow) -> Result<Notification> {
        Ok(Notification {
            id: NotificationId::new(row.id),
            title_id: TitleId::new(row.title_id),
            kind: row.kind.parse::<NotificationKind>().map_err(Error::Parse)?,
            message: row.message,
            read: row.is_read,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }

    fn watchlist_from_row(row: WatchlistRow) -> Result<Watchlist> {
        Ok(Watchlist {
            id: WatchlistId::new(row.id),
            name: row.name,
            description: row.description,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

fn parse_decimal(value: Option<&str>) -> Result<Option<Decimal>> {
    value
        .map(|v| Decimal::from_str(v).map_err(|e| Error::Parse(e.to_string())))
        .transpose()
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| Error::Parse(e.to_string()))
}

fn decimal_text(value: Option<Decimal>) -> Option<String> {
    value.map(|d| d.to_string())
}

impl CatalogStore for SqliteCatalog {
    fn add_title(&self, draft: &TitleDraft) -> Result<Title> {
        let mut conn = self.conn()?;
        let result = conn.immediate_transaction::<_, Error, _>(|conn| {
            let now = Utc::now();
            let row = NewTitleRow {
                external_id: draft.external_id.clone(),
                name: draft.name.clone(),
                author: draft.author.clone(),
                current_price: decimal_text(draft.price),
                rating: decimal_text(draft.rating),
                rating_count: draft.rating_count,
                page_count: draft.page_count,
                category: draft.category.clone(),
                publisher: draft.publisher.clone(),
                published_date: draft.published_date.clone(),
                added_at: now.to_rfc3339(),
                updated_at: now.to_rfc3339(),
            };
            diesel::insert_into(titles::table).values(&row).execute(conn)?;
            let id: i32 = diesel::select(last_insert_rowid()).get_result(conn)?;

            // A priced draft starts its market history immediately.
            if draft.price.is_some() {
                diesel::insert_into(snapshots::table)
                    .values(&NewSnapshotRow {
                        title_id: id,
                        price: decimal_text(draft.price),
                        rating: decimal_text(draft.rating),
                        rating_count: draft.rating_count,
                        captured_at: now.to_rfc3339(),
                    })
                    .execute(conn)?;
            }

            Ok(Title {
                id: TitleId::new(id),
                external_id: draft.external_id.clone(),
                name: draft.name.clone(),
                author: draft.author.clone(),
                current_price: draft.price,
                rating: draft.rating,
                rating_count: draft.rating_count,
                page_count: draft.page_count,
                category: draft.category.clone(),
                publisher: draft.publisher.clone(),
                published_date: draft.published_date.clone(),
                added_at: now,
                updated_at: now,
            })
        });

        result.map_err(|e| match e {
            Error::Conflict(_) => Error::Conflict("title already exists".to_string()),
            other => other,
        })
    }

    fn title(&self, id: TitleId) -> Result<Option<Title>> {
        let mut conn = self.conn()?;
        let row: Option<TitleRow> = titles::table
            .find(id.value())
            .select(TitleRow::as_select())
            .first(&mut conn)
            .optional()?;
        row.map(Self::title_from_row).transpose()
    }

    fn list_titles(&self) -> Result<Vec<Title>> {
        let mut conn = self.conn()?;
        let rows: Vec<TitleRow> = titles::table
            .order((titles::added_at.desc(), titles::id.desc()))
            .select(TitleRow::as_select())
            .load(&mut conn)?;
        rows.into_iter().map(Self::title_from_row).collect()
    }

    fn remove_title(&self, id: TitleId) -> Result<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(titles::table.find(id.value())).execute(&mut conn)?;
        Ok(deleted > 0)
    }

    fn history(&self, id: TitleId) -> Result<Vec<Snapshot>> {
        let mut conn = self.conn()?;
        let rows: Vec<SnapshotRow> = snapshots::table
            .filter(snapshots::title_id.eq(id.value()))
            .order((snapshots::captured_at.asc(), snapshots::id.asc()))
            .select(SnapshotRow::as_select())
            .load(&mut conn)?;
        rows.into_iter().map(Self::snapshot_from_row).collect()
    }

    fn find_competitors(&self, tag: &str, exclude: TitleId) -> Result<Vec<CompetitorPeer>> {
        let mut conn = self.conn()?;
        // SQLite's LIKE is ASCII case-insensitive; the category match must
        // be case-sensitive, so narrow in SQL and test the substring here.
        let rows: Vec<TitleRow> = titles::table
            .filter(titles::id.ne(exclude.value()))
            .filter(titles::current_price.is_not_null())
            .select(TitleRow::as_select())
            .load(&mut conn)?;

        let mut peers = Vec::new();
        for row in rows {
            if !row.category.contains(tag) {
                continue;
            }
            let Some(price) = parse_decimal(row.current_price.as_deref())? else {
                continue;
            };
            peers.push(CompetitorPeer {
                price,
                rating: parse_decimal(row.rating.as_deref())?,
                page_count: row.page_count,
            });
        }
        Ok(peers)
    }

    fn record_update(
        &self,
        id: TitleId,
        update: &MarketUpdate,
        detector: &DetectorConfig,
    ) -> Result<UpdateOutcome> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, Error, _>(|conn| {
            let row: Option<TitleRow> = titles::table
                .find(id.value())
                .select(TitleRow::as_select())
                .first(conn)
                .optional()?;
            let Some(row) = row else {
                return Err(Error::TitleNotFound { id });
            };
            let old = Self::title_from_row(row)?;

            let new_price = update.price.or(old.current_price);
            let new_rating = update.rating.or(old.rating);
            let new_count = update.rating_count.unwrap_or(old.rating_count);
            let now = Utc::now();

            let pending = detect_changes(
                old.current_price,
                new_price,
                old.rating,
                new_rating,
                detector,
            );

            diesel::update(titles::table.find(id.value()))
                .set((
                    titles::current_price.eq(decimal_text(new_price)),
                    titles::rating.eq(decimal_text(new_rating)),
                    titles::rating_count.eq(new_count),
                    titles::updated_at.eq(now.to_rfc3339()),
                ))
                .execute(conn)?;

            // The snapshot is appended whether or not anything fired.
            diesel::insert_into(snapshots::table)
                .values(&NewSnapshotRow {
                    title_id: id.value(),
                    price: decimal_text(new_price),
                    rating: decimal_text(new_rating),
                    rating_count: new_count,
                    captured_at: now.to_rfc3339(),
                })
                .execute(conn)?;

            let mut stored = Vec::with_capacity(pending.len());
            for p in pending {
                diesel::insert_into(notifications::table)
                    .values(&NewNotificationRow {
                        title_id: id.value(),
                        message: p.message.clone(),
                        kind: p.kind.as_str().to_string(),
                        is_read: false,
                        created_at: now.to_rfc3339(),
                    })
                    .execute(conn)?;
                let row_id: i32 = diesel::select(last_insert_rowid()).get_result(conn)?;
                debug!(title_id = %id, kind = %p.kind, "notification recorded");
                stored.push(Notification {
                    id: NotificationId::new(row_id),
                    title_id: id,
                    kind: p.kind,
                    message: p.message,
                    read: false,
                    created_at: now,
                });
            }

            let title = Title {
                current_price: new_price,
                rating: new_rating,
                rating_count: new_count,
                updated_at: now,
                ..old
            };
            Ok(UpdateOutcome {
                title,
                notifications: stored,
            })
        })
    }

    fn notifications(&self, limit: i64, unread_only: bool) -> Result<Vec<NotificationFeedItem>> {
        let mut conn = self.conn()?;
        let rows: Vec<(NotificationRow, String, String)> = if unread_only {
            notifications::table
                .inner_join(titles::table)
                .filter(notifications::is_read.eq(false))
                .order((notifications::created_at.desc(), notifications::id.desc()))
                .limit(limit)
                .select((NotificationRow::as_select(), titles::name, titles::author))
                .load(&mut conn)?
        } else {
            notifications::table
                .inner_join(titles::table)
                .order((notifications::created_at.desc(), notifications::id.desc()))
                .limit(limit)
                .select((NotificationRow::as_select(), titles::name, titles::author))
                .load(&mut conn)?
        };

        rows.into_iter()
            .map(|(row, title_name, author)| {
                Ok(NotificationFeedItem {
                    notification: Self::notification_from_row(row)?,
                    title_name,
                    author,
                })
            })
            .collect()
    }

    fn mark_notification_read(&self, id: NotificationId) -> Result<bool> {
        let mut conn = self.conn()?;
        let updated = diesel::update(notifications::table.find(id.value()))
            .set(notifications::is_read.eq(true))
            .execute(&mut conn)?;
        Ok(updated > 0)
    }

    fn stats(&self) -> Result<CatalogStats> {
        let mut conn = self.conn()?;
        let total_titles: i64 = titles::table.count().get_result(&mut conn)?;

        let price_texts: Vec<Option<String>> = titles::table
            .filter(titles::current_price.is_not_null())
            .select(titles::current_price)
            .load(&mut conn)?;
        let rating_texts: Vec<Option<String>> = titles::table
            .filter(titles::rating.is_not_null())
            .select(titles::rating)
            .load(&mut conn)?;

        let unread_notifications: i64 = notifications::table
            .filter(notifications::is_read.eq(false))
            .count()
            .get_result(&mut conn)?;

        Ok(CatalogStats {
            total_titles,
            avg_price: mean_of_texts(&price_texts)?,
            avg_rating: mean_of_texts(&rating_texts)?,
            unread_notifications,
        })
    }

    fn create_watchlist(&self, name: &str, description: &str) -> Result<Watchlist> {
        let mut conn = self.conn()?;
        let result = conn.immediate_transaction::<_, Error, _>(|conn| {
            let now = Utc::now();
            diesel::insert_into(watchlists::table)
                .values(&NewWatchlistRow {
                    name: name.to_string(),
                    description: description.to_string(),
                    created_at: now.to_rfc3339(),
                })
                .execute(conn)?;
            let id: i32 = diesel::select(last_insert_rowid()).get_result(conn)?;
            Ok(Watchlist {
                id: WatchlistId::new(id),
                name: name.to_string(),
                description: description.to_string(),
                created_at: now,
            })
        });

        result.map_err(|e| match e {
            Error::Conflict(_) => {
                Error::Conflict("a watchlist with this name already exists".to_string())
            }
            other => other,
        })
    }

    fn watchlists(&self) -> Result<Vec<WatchlistSummary>> {
        let mut conn = self.conn()?;
        let rows: Vec<WatchlistRow> = watchlists::table
            .order((watchlists::created_at.desc(), watchlists::id.desc()))
            .select(WatchlistRow::as_select())
            .load(&mut conn)?;

        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            let title_count: i64 = watchlist_titles::table
                .filter(watchlist_titles::watchlist_id.eq(row.id))
                .count()
                .get_result(&mut conn)?;
            summaries.push(WatchlistSummary {
                watchlist: Self::watchlist_from_row(row)?,
                title_count,
            });
        }
        Ok(summaries)
    }

    fn watchlist_titles(&self, id: WatchlistId) -> Result<Vec<Title>> {
        let mut conn = self.conn()?;
        let exists: Option<i32> = watchlists::table
            .find(id.value())
            .select(watchlists::id)
            .first(&mut conn)
            .optional()?;
        if exists.is_none() {
            return Err(Error::WatchlistNotFound { id });
        }

        let rows: Vec<TitleRow> = watchlist_titles::table
            .inner_join(titles::table)
            .filter(watchlist_titles::watchlist_id.eq(id.value()))
            .order((watchlist_titles::added_at.desc(), titles::id.desc()))
            .select(TitleRow::as_select())
            .load(&mut conn)?;
        rows.into_iter().map(Self::title_from_row).collect()
    }

    fn add_to_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<()> {
        let mut conn = self.conn()?;
        let watchlist_exists: Option<i32> = watchlists::table
            .find(watchlist.value())
            .select(watchlists::id)
            .first(&mut conn)
            .optional()?;
        if watchlist_exists.is_none() {
            return Err(Error::WatchlistNotFound { id: watchlist });
        }
        let title_exists: Option<i32> = titles::table
            .find(title.value())
            .select(titles::id)
            .first(&mut conn)
            .optional()?;
        if title_exists.is_none() {
            return Err(Error::TitleNotFound { id: title });
        }

        let result = diesel::insert_into(watchlist_titles::table)
            .values(&WatchlistTitleRow {
                watchlist_id: watchlist.value(),
                title_id: title.value(),
                added_at: Utc::now().to_rfc3339(),
            })
            .execute(&mut conn);

        match result {
            Ok(_) => Ok(()),
            Err(e) => match Error::from(e) {
                Error::Conflict(_) => Err(Error::Conflict(
                    "title is already in this watchlist".to_string(),
                )),
                other => Err(other),
            },
        }
    }

    fn remove_from_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            watchlist_titles::table
                .filter(watchlist_titles::watchlist_id.eq(watchlist.value()))
                .filter(watchlist_titles::title_id.eq(title.value())),
        )
        .execute(&mut conn)?;
        Ok(deleted > 0)
    }

    fn delete_watchlist(&self, id: WatchlistId) -> Result<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(watchlists::table.find(id.value())).execute(&mut conn)?;
        Ok(deleted > 0)
    }
}

fn mean_of_texts(values: &[Option<String>]) -> Result<Option<Decimal>> {
    let mut parsed = Vec::with_capacity(values.len());
    for value in values.iter().flatten() {
        parsed.push(Decimal::from_str(value).map_err(|e| Error::Parse(e.to_string()))?);
    }
    if parsed.is_empty() {
        return Ok(None);
    }
    let sum: Decimal = parsed.iter().sum();
    Ok(Some(round_cents(sum / Decimal::from(parsed.len()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MIGRATIONS;
    use diesel::connection::SimpleConnection;
    use diesel::r2d2::Pool;
    use diesel_migrations::MigrationHarness;
    use rust_decimal_macros::dec;

    fn setup_test_db() -> DbPool {
        // A single-connection pool keeps the in-memory database alive and
        // shared across all queries in the test.
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .expect("Failed to create pool");
        let mut conn = pool.get().expect("Failed to get connection");
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .expect("Failed to enable foreign keys");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
        drop(conn);
        pool
    }

    fn draft(name: &str, category: &str, price: Option<Decimal>) -> TitleDraft {
        TitleDraft {
            price,
            category: category.to_string(),
            ..TitleDraft::new(name, "Test Author")
        }
    }

    #[test]
    fn priced_title_roundtrip_with_initial_snapshot() {
        let store = SqliteCatalog::new(setup_test_db());

        let mut d = draft("The Quiet Orchard", "Fiction, Literary", Some(dec!(4.99)));
        d.rating = Some(dec!(4.2));
        d.rating_count = 37;
        d.page_count = Some(310);
        let title = store.add_title(&d).unwrap();

        let loaded = store.title(title.id).unwrap().unwrap();
        assert_eq!(loaded.name, "The Quiet Orchard");
        assert_eq!(loaded.current_price, Some(dec!(4.99)));
        assert_eq!(loaded.rating, Some(dec!(4.2)));
        assert_eq!(loaded.page_count, Some(310));

        let history = store.history(title.id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price, Some(dec!(4.99)));
    }

    #[test]
    fn unpriced_title_starts_with_empty_history() {
        let store = SqliteCatalog::new(setup_test_db());
        let title = store.add_title(&draft("No Price Yet", "Fiction", None)).unwrap();
        assert!(store.history(title.id).unwrap().is_empty());
    }

    #[test]
    fn duplicate_external_id_is_a_conflict() {
        let store = SqliteCatalog::new(setup_test_db());
        let mut d = draft("First", "Fiction", None);
        d.external_id = Some("isbn-1".to_string());
        store.add_title(&d).unwrap();

        let mut dup = draft("Second", "Fiction", None);
        dup.external_id = Some("isbn-1".to_string());
        assert!(matches!(store.add_title(&dup), Err(Error::Conflict(_))));
    }

    #[test]
    fn record_update_commits_fields_snapshot_and_notifications() {
        let store = SqliteCatalog::new(setup_test_db());
        let mut d = draft("Tracked", "Fiction", Some(dec!(10.00)));
        d.rating = Some(dec!(4.0));
        let title = store.add_title(&d).unwrap();

        let outcome = store
            .record_update(
                title.id,
                &MarketUpdate {
                    price: Some(dec!(10.60)),
                    rating: Some(dec!(4.3)),
                    rating_count: Some(50),
                },
                &DetectorConfig::default(),
            )
            .unwrap();

        assert_eq!(outcome.title.current_price, Some(dec!(10.60)));
        assert_eq!(outcome.title.rating_count, 50);
        assert_eq!(outcome.notifications.len(), 2);
        assert_eq!(
            outcome.notifications[0].message,
            "Price increase: $10.00 → $10.60"
        );
        assert_eq!(
            outcome.notifications[1].message,
            "Rating increased: 4.0 → 4.3"
        );

        let history = store.history(title.id).unwrap();
        assert_eq!(history.len(), 2);

        let feed = store.notifications(10, true).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].title_name, "Tracked");
    }

    #[test]
    fn small_moves_append_snapshot_without_notification() {
        let store = SqliteCatalog::new(setup_test_db());
        let title = store
            .add_title(&draft("Quiet", "Fiction", Some(dec!(10.00))))
            .unwrap();

        let outcome = store
            .record_update(
                title.id,
                &MarketUpdate {
                    price: Some(dec!(10.40)),
                    ..MarketUpdate::default()
                },
                &DetectorConfig::default(),
            )
            .unwrap();

        assert!(outcome.notifications.is_empty());
        assert_eq!(store.history(title.id).unwrap().len(), 2);
    }

    #[test]
    fn partial_update_preserves_unsubmitted_fields() {
        let store = SqliteCatalog::new(setup_test_db());
        let mut d = draft("Partial", "Fiction", Some(dec!(5.99)));
        d.rating = Some(dec!(4.5));
        let title = store.add_title(&d).unwrap();

        let outcome = store
            .record_update(
                title.id,
                &MarketUpdate {
                    rating: Some(dec!(4.1)),
                    ..MarketUpdate::default()
                },
                &DetectorConfig::default(),
            )
            .unwrap();

        // price untouched, rating moved far enough to fire
        assert_eq!(outcome.title.current_price, Some(dec!(5.99)));
        assert_eq!(outcome.notifications.len(), 1);
        assert_eq!(outcome.notifications[0].kind, NotificationKind::RatingChange);
    }

    #[test]
    fn record_update_on_missing_title_is_not_found() {
        let store = SqliteCatalog::new(setup_test_db());
        let err = store
            .record_update(
                TitleId::new(404),
                &MarketUpdate::default(),
                &DetectorConfig::default(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::TitleNotFound { .. }));
    }

    #[test]
    fn snapshots_are_ordered_and_append_only() {
        let store = SqliteCatalog::new(setup_test_db());
        let title = store
            .add_title(&draft("History", "Fiction", Some(dec!(3.99))))
            .unwrap();

        for price in [dec!(4.99), dec!(5.99), dec!(6.99)] {
            store
                .record_update(
                    title.id,
                    &MarketUpdate {
                        price: Some(price),
                        ..MarketUpdate::default()
                    },
                    &DetectorConfig::default(),
                )
                .unwrap();
        }

        let history = store.history(title.id).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].price, Some(dec!(3.99)));
        assert_eq!(history[3].price, Some(dec!(6.99)));
        for pair in history.windows(2) {
            assert!(pair[0].captured_at <= pair[1].captured_at);
        }
    }

    #[test]
    fn competitor_query_excludes_self_unpriced_and_other_categories() {
        let store = SqliteCatalog::new(setup_test_db());
        let target = store
            .add_title(&draft("Target", "Science Fiction, Space", Some(dec!(4.99))))
            .unwrap();
        store
            .add_title(&draft("Peer A", "Science Fiction", Some(dec!(5.99))))
            .unwrap();
        store
            .add_title(&draft("Unpriced Peer", "Science Fiction", None))
            .unwrap();
        store
            .add_title(&draft("Other Genre", "Romance", Some(dec!(2.99))))
            .unwrap();
        // case matters: lowercase tag is not a match
        store
            .add_title(&draft("Wrong Case", "science fiction", Some(dec!(7.99))))
            .unwrap();

        let peers = store
            .find_competitors("Science Fiction", target.id)
            .unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].price, dec!(5.99));
    }

    #[test]
    fn removing_a_title_cascades_to_history_and_notifications() {
        let store = SqliteCatalog::new(setup_test_db());
        let title = store
            .add_title(&draft("Doomed", "Fiction", Some(dec!(10.00))))
            .unwrap();
        store
            .record_update(
                title.id,
                &MarketUpdate {
                    price: Some(dec!(12.00)),
                    ..MarketUpdate::default()
                },
                &DetectorConfig::default(),
            )
            .unwrap();
        assert_eq!(store.notifications(10, false).unwrap().len(), 1);

        assert!(store.remove_title(title.id).unwrap());
        assert!(!store.remove_title(title.id).unwrap());

        assert!(store.history(title.id).unwrap().is_empty());
        assert!(store.notifications(10, false).unwrap().is_empty());
    }

    #[test]
    fn mark_notification_read_flips_the_flag() {
        let store = SqliteCatalog::new(setup_test_db());
        let title = store
            .add_title(&draft("Flagged", "Fiction", Some(dec!(10.00))))
            .unwrap();
        let outcome = store
            .record_update(
                title.id,
                &MarketUpdate {
                    price: Some(dec!(12.00)),
                    ..MarketUpdate::default()
                },
                &DetectorConfig::default(),
            )
            .unwrap();

        let id = outcome.notifications[0].id;
        assert!(store.mark_notification_read(id).unwrap());
        assert!(store.notifications(10, true).unwrap().is_empty());
        assert_eq!(store.notifications(10, false).unwrap().len(), 1);
        assert!(!store.mark_notification_read(NotificationId::new(999)).unwrap());
    }

    #[test]
    fn stats_aggregate_over_present_values_only() {
        let store = SqliteCatalog::new(setup_test_db());
        store
            .add_title(&draft("Priced", "Fiction", Some(dec!(4.00))))
            .unwrap();
        let mut rated = draft("Rated", "Fiction", Some(dec!(6.00)));
        rated.rating = Some(dec!(4.5));
        store.add_title(&rated).unwrap();
        store.add_title(&draft("Bare", "Fiction", None)).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_titles, 3);
        assert_eq!(stats.avg_price, Some(dec!(5.00)));
        assert_eq!(stats.avg_rating, Some(dec!(4.50)));
        assert_eq!(stats.unread_notifications, 0);
    }

    #[test]
    fn watchlist_lifecycle() {
        let store = SqliteCatalog::new(setup_test_db());
        let title = store
            .add_title(&draft("Member", "Fiction", Some(dec!(4.99))))
            .unwrap();

        let list = store.create_watchlist("Thrillers", "stuff to watch").unwrap();
        assert!(matches!(
            store.create_watchlist("Thrillers", ""),
            Err(Error::Conflict(_))
        ));

        store.add_to_watchlist(list.id, title.id).unwrap();
        assert!(matches!(
            store.add_to_watchlist(list.id, title.id),
            Err(Error::Conflict(_))
        ));
        assert!(matches!(
            store.add_to_watchlist(WatchlistId::new(99), title.id),
            Err(Error::WatchlistNotFound { .. })
        ));
        assert!(matches!(
            store.add_to_watchlist(list.id, TitleId::new(99)),
            Err(Error::TitleNotFound { .. })
        ));

        let summaries = store.watchlists().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].title_count, 1);

        let members = store.watchlist_titles(list.id).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Member");

        // deleting the title clears membership but not the watchlist
        store.remove_title(title.id).unwrap();
        assert!(store.watchlist_titles(list.id).unwrap().is_empty());

        assert!(store.delete_watchlist(list.id).unwrap());
        assert!(matches!(
            store.watchlist_titles(list.id),
            Err(Error::WatchlistNotFound { .. })
        ));
    }

    #[test]
    fn deleting_a_watchlist_keeps_its_titles() {
        let store = SqliteCatalog::new(setup_test_db());
        let title = store
            .add_title(&draft("Survivor", "Fiction", None))
            .unwrap();
        let list = store.create_watchlist("Short-lived", "").unwrap();
        store.add_to_watchlist(list.id, title.id).unwrap();

        store.delete_watchlist(list.id).unwrap();
        assert!(store.title(title.id).unwrap().is_some());
    }
}
