//! Notification records produced by the change detector.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{NotificationId, TitleId};

/// The kind of movement a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PriceChange,
    RatingChange,
}

impl NotificationKind {
    /// Wire/storage tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceChange => "price_change",
            Self::RatingChange => "rating_change",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_change" => Ok(Self::PriceChange),
            "rating_change" => Ok(Self::RatingChange),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}

/// A notification produced by the change detector but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNotification {
    pub kind: NotificationKind,
    pub message: String,
}

/// A persisted notification owned by a title.
///
/// Created only by the change detector, never by direct user input. Later
/// marked read by a user action; never auto-expired.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title_id: TitleId,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A notification joined with its title for display.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationFeedItem {
    #[serde(flatten)]
    pub notification: Notification,
    pub title_name: String,
    pub author: String,
}
