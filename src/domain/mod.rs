//! Core domain types: titles, snapshots, notifications, watchlists.

pub mod id;
pub mod money;
pub mod notification;
pub mod snapshot;
pub mod stats;
pub mod title;
pub mod watchlist;

pub use id::{NotificationId, TitleId, WatchlistId};
pub use money::{round_cents, round_tenths, Price, Rating};
pub use notification::{Notification, NotificationFeedItem, NotificationKind, PendingNotification};
pub use snapshot::Snapshot;
pub use stats::CatalogStats;
pub use title::{MarketUpdate, Title, TitleDraft};
pub use watchlist::{Watchlist, WatchlistSummary};
