//! In-memory catalog implementation for testing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::{CatalogStore, UpdateOutcome};
use crate::detector::{detect_changes, DetectorConfig};
use crate::domain::{
    CatalogStats, MarketUpdate, Notification, NotificationFeedItem, NotificationId, Snapshot,
    Title, TitleDraft, TitleId, Watchlist, WatchlistId, WatchlistSummary,
};
use crate::domain::round_cents;
use crate::error::{Error, Result};
use crate::pricing::CompetitorPeer;

#[derive(Debug, Default)]
struct Inner {
    titles: HashMap<TitleId, Title>,
    snapshots: Vec<Snapshot>,
    notifications: Vec<Notification>,
    watchlists: HashMap<WatchlistId, Watchlist>,
    memberships: Vec<(WatchlistId, TitleId, DateTime<Utc>)>,
    next_title_id: i32,
    next_snapshot_id: i32,
    next_notification_id: i32,
    next_watchlist_id: i32,
}

/// In-memory catalog store for testing purposes.
///
/// The single write lock gives the same one-writer-per-title discipline the
/// SQLite store gets from its immediate transactions.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
}

impl MemoryCatalog {
    /// Create a new empty memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MemoryCatalog {
    fn add_title(&self, draft: &TitleDraft) -> Result<Title> {
        let mut inner = self.inner.write();
        if let Some(external_id) = &draft.external_id {
            if inner
                .titles
                .values()
                .any(|t| t.external_id.as_deref() == Some(external_id))
            {
                return Err(Error::Conflict("title already exists".to_string()));
            }
        }

        inner.next_title_id += 1;
        let id = TitleId::new(inner.next_title_id);
        let now = Utc::now();
        let title = Title {
            id,
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
        };
        inner.titles.insert(id, title.clone());

        if draft.price.is_some() {
            inner.next_snapshot_id += 1;
            let snapshot_id = inner.next_snapshot_id;
            inner.snapshots.push(Snapshot {
                id: snapshot_id,
                title_id: id,
                price: draft.price,
                rating: draft.rating,
                rating_count: draft.rating_count,
                captured_at: now,
            });
        }

        Ok(title)
    }

    fn title(&self, id: TitleId) -> Result<Option<Title>> {
        Ok(self.inner.read().titles.get(&id).cloned())
    }

    fn list_titles(&self) -> Result<Vec<Title>> {
        let inner = self.inner.read();
        let mut titles: Vec<Title> = inner.titles.values().cloned().collect();
        titles.sort_by(|a, b| (b.added_at, b.id).cmp(&(a.added_at, a.id)));
        Ok(titles)
    }

    fn remove_title(&self, id: TitleId) -> Result<bool> {
        let mut inner = self.inner.write();
        if inner.titles.remove(&id).is_none() {
            return Ok(false);
        }
        inner.snapshots.retain(|s| s.title_id != id);
        inner.notifications.retain(|n| n.title_id != id);
        inner.memberships.retain(|(_, title_id, _)| *title_id != id);
        Ok(true)
    }

    fn history(&self, id: TitleId) -> Result<Vec<Snapshot>> {
        let inner = self.inner.read();
        let mut snapshots: Vec<Snapshot> = inner
            .snapshots
            .iter()
            .filter(|s| s.title_id == id)
            .cloned()
            .collect();
        snapshots.sort_by(|a, b| (a.captured_at, a.id).cmp(&(b.captured_at, b.id)));
        Ok(snapshots)
    }

    fn find_competitors(&self, tag: &str, exclude: TitleId) -> Result<Vec<CompetitorPeer>> {
        let inner = self.inner.read();
        Ok(inner
            .titles
            .values()
            .filter(|t| t.id != exclude)
            .filter(|t| t.category.contains(tag))
            .filter_map(|t| {
                t.current_price.map(|price| CompetitorPeer {
                    price,
                    rating: t.rating,
                    page_count: t.page_count,
                })
            })
            .collect())
    }

    fn record_update(
        &self,
        id: TitleId,
        update: &MarketUpdate,
        detector: &DetectorConfig,
    ) -> Result<UpdateOutcome> {
        let mut inner = self.inner.write();
        let old = inner
            .titles
            .get(&id)
            .cloned()
            .ok_or(Error::TitleNotFound { id })?;

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

        let title = Title {
            current_price: new_price,
            rating: new_rating,
            rating_count: new_count,
            updated_at: now,
            ..old
        };
        inner.titles.insert(id, title.clone());

        inner.next_snapshot_id += 1;
        let snapshot_id = inner.next_snapshot_id;
        inner.snapshots.push(Snapshot {
            id: snapshot_id,
            title_id: id,
            price: new_price,
            rating: new_rating,
            rating_count: new_count,
            captured_at: now,
        });

        let mut stored = Vec::with_capacity(pending.len());
        for p in pending {
            inner.next_notification_id += 1;
            let notification = Notification {
                id: NotificationId::new(inner.next_notification_id),
                title_id: id,
                kind: p.kind,
                message: p.message,
                read: false,
                created_at: now,
            };
            inner.notifications.push(notification.clone());
            stored.push(notification);
        }

        Ok(UpdateOutcome {
            title,
            notifications: stored,
        })
    }

    fn notifications(&self, limit: i64, unread_only: bool) -> Result<Vec<NotificationFeedItem>> {
        let inner = self.inner.read();
        let mut items: Vec<NotificationFeedItem> = inner
            .notifications
            .iter()
            .filter(|n| !unread_only || !n.read)
            .filter_map(|n| {
                inner.titles.get(&n.title_id).map(|t| NotificationFeedItem {
                    notification: n.clone(),
                    title_name: t.name.clone(),
                    author: t.author.clone(),
                })
            })
            .collect();
        items.sort_by(|a, b| {
            (b.notification.created_at, b.notification.id)
                .cmp(&(a.notification.created_at, a.notification.id))
        });
        items.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(items)
    }

    fn mark_notification_read(&self, id: NotificationId) -> Result<bool> {
        let mut inner = self.inner.write();
        match inner.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn stats(&self) -> Result<CatalogStats> {
        let inner = self.inner.read();
        let prices: Vec<_> = inner
            .titles
            .values()
            .filter_map(|t| t.current_price)
            .collect();
        let ratings: Vec<_> = inner.titles.values().filter_map(|t| t.rating).collect();

        let mean = |values: &[rust_decimal::Decimal]| {
            if values.is_empty() {
                None
            } else {
                let sum: rust_decimal::Decimal = values.iter().sum();
                Some(round_cents(sum / rust_decimal::Decimal::from(values.len())))
            }
        };

        Ok(CatalogStats {
            total_titles: inner.titles.len() as i64,
            avg_price: mean(&prices),
            avg_rating: mean(&ratings),
            unread_notifications: inner.notifications.iter().filter(|n| !n.read).count() as i64,
        })
    }

    fn create_watchlist(&self, name: &str, description: &str) -> Result<Watchlist> {
        let mut inner = self.inner.write();
        if inner.watchlists.values().any(|w| w.name == name) {
            return Err(Error::Conflict(
                "a watchlist with this name already exists".to_string(),
            ));
        }
        inner.next_watchlist_id += 1;
        let watchlist = Watchlist {
            id: WatchlistId::new(inner.next_watchlist_id),
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        };
        inner.watchlists.insert(watchlist.id, watchlist.clone());
        Ok(watchlist)
    }

    fn watchlists(&self) -> Result<Vec<WatchlistSummary>> {
        let inner = self.inner.read();
        let mut summaries: Vec<WatchlistSummary> = inner
            .watchlists
            .values()
            .map(|w| WatchlistSummary {
                watchlist: w.clone(),
                title_count: inner
                    .memberships
                    .iter()
                    .filter(|(wid, _, _)| *wid == w.id)
                    .count() as i64,
            })
            .collect();
        summaries.sort_by(|a, b| {
            (b.watchlist.created_at, b.watchlist.id).cmp(&(a.watchlist.created_at, a.watchlist.id))
        });
        Ok(summaries)
    }

    fn watchlist_titles(&self, id: WatchlistId) -> Result<Vec<Title>> {
        let inner = self.inner.read();
        if !inner.watchlists.contains_key(&id) {
            return Err(Error::WatchlistNotFound { id });
        }
        let mut members: Vec<(DateTime<Utc>, Title)> = inner
            .memberships
            .iter()
            .filter(|(wid, _, _)| *wid == id)
            .filter_map(|(_, tid, added_at)| {
                inner.titles.get(tid).map(|t| (*added_at, t.clone()))
            })
            .collect();
        members.sort_by(|a, b| (b.0, b.1.id).cmp(&(a.0, a.1.id)));
        Ok(members.into_iter().map(|(_, title)| title).collect())
    }

    fn add_to_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.watchlists.contains_key(&watchlist) {
            return Err(Error::WatchlistNotFound { id: watchlist });
        }
        if !inner.titles.contains_key(&title) {
            return Err(Error::TitleNotFound { id: title });
        }
        if inner
            .memberships
            .iter()
            .any(|(wid, tid, _)| *wid == watchlist && *tid == title)
        {
            return Err(Error::Conflict(
                "title is already in this watchlist".to_string(),
            ));
        }
        inner.memberships.push((watchlist, title, Utc::now()));
        Ok(())
    }

    fn remove_from_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<bool> {
        let mut inner = self.inner.write();
        let before = inner.memberships.len();
        inner
            .memberships
            .retain(|(wid, tid, _)| !(*wid == watchlist && *tid == title));
        Ok(inner.memberships.len() < before)
    }

    fn delete_watchlist(&self, id: WatchlistId) -> Result<bool> {
        let mut inner = self.inner.write();
        if inner.watchlists.remove(&id).is_none() {
            return Ok(false);
        }
        inner.memberships.retain(|(wid, _, _)| *wid != id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(name: &str, category: &str, price: Option<rust_decimal::Decimal>) -> TitleDraft {
        TitleDraft {
            price,
            category: category.to_string(),
            ..TitleDraft::new(name, "Author")
        }
    }

    #[test]
    fn memory_update_flow_matches_sqlite_semantics() {
        let store = MemoryCatalog::new();
        let title = store
            .add_title(&draft("Tracked", "Fiction", Some(dec!(10.00))))
            .unwrap();

        let outcome = store
            .record_update(
                title.id,
                &MarketUpdate {
                    price: Some(dec!(10.60)),
                    ..MarketUpdate::default()
                },
                &DetectorConfig::default(),
            )
            .unwrap();

        assert_eq!(outcome.notifications.len(), 1);
        assert_eq!(store.history(title.id).unwrap().len(), 2);
        assert_eq!(store.notifications(10, true).unwrap().len(), 1);
    }

    #[test]
    fn memory_cascade_on_remove() {
        let store = MemoryCatalog::new();
        let title = store
            .add_title(&draft("Doomed", "Fiction", Some(dec!(10.00))))
            .unwrap();
        let list = store.create_watchlist("List", "").unwrap();
        store.add_to_watchlist(list.id, title.id).unwrap();

        assert!(store.remove_title(title.id).unwrap());
        assert!(store.history(title.id).unwrap().is_empty());
        assert!(store.watchlist_titles(list.id).unwrap().is_empty());
    }

    #[test]
    fn memory_competitors_are_case_sensitive() {
        let store = MemoryCatalog::new();
        let target = store
            .add_title(&draft("Target", "Mystery", Some(dec!(4.99))))
            .unwrap();
        store
            .add_title(&draft("Match", "Mystery, Crime", Some(dec!(5.99))))
            .unwrap();
        store
            .add_title(&draft("Wrong Case", "mystery", Some(dec!(6.99))))
            .unwrap();

        let peers = store.find_competitors("Mystery", target.id).unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].price, dec!(5.99));
    }
}
