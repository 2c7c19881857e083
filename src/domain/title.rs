//! Tracked title records and update inputs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::TitleId;
use super::money::{Price, Rating};

/// A tracked publication record.
///
/// `name` and `author` are always present; `current_price` and `rating` are
/// independently nullable - a title may have no observed price or rating
/// yet. The category is a free-text comma-joined tag list; the first tag is
/// the primary tag used for competitor matching.
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub id: TitleId,
    /// External catalog identifier (ISBN or volume id), if known.
    pub external_id: Option<String>,
    pub name: String,
    pub author: String,
    pub current_price: Option<Price>,
    pub rating: Option<Rating>,
    pub rating_count: i32,
    pub page_count: Option<i32>,
    pub category: String,
    pub publisher: Option<String>,
    /// Free-form date string as reported by the upstream catalog
    /// (e.g. "2019" or "2019-05-01").
    pub published_date: Option<String>,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Title {
    /// First comma-separated token of the category, trimmed.
    ///
    /// Returns `None` when the category is empty, in which case no
    /// competitor matching is possible.
    #[must_use]
    pub fn primary_tag(&self) -> Option<&str> {
        let tag = self.category.split(',').next().unwrap_or("").trim();
        if tag.is_empty() {
            None
        } else {
            Some(tag)
        }
    }
}

/// Input record for adding a title to the catalog.
#[derive(Debug, Clone, Default)]
pub struct TitleDraft {
    pub external_id: Option<String>,
    pub name: String,
    pub author: String,
    pub price: Option<Price>,
    pub rating: Option<Rating>,
    pub rating_count: i32,
    pub page_count: Option<i32>,
    pub category: String,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
}

impl TitleDraft {
    /// Create a draft with the two required fields set.
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Check the draft invariants: name and author must be non-empty.
    pub fn validate(&self) -> Result<(), crate::error::Error> {
        if self.name.trim().is_empty() {
            return Err(crate::error::Error::InvalidInput(
                "title name is required".into(),
            ));
        }
        if self.author.trim().is_empty() {
            return Err(crate::error::Error::InvalidInput(
                "author is required".into(),
            ));
        }
        Ok(())
    }
}

/// A submitted price/rating update for a title.
///
/// `None` fields are left unchanged; the effective values after the merge
/// are what the change detector compares against the stored ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketUpdate {
    pub price: Option<Price>,
    pub rating: Option<Rating>,
    pub rating_count: Option<i32>,
}
