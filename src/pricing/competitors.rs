//! Competitor aggregation: same-category peers reduced to summary statistics.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Price, Rating, Title};
use crate::error::Result;
use crate::store::CatalogStore;

/// A same-category peer row as returned by the catalog store.
///
/// The price is always present (unpriced titles are excluded from the
/// competitor query); rating and page count are per-row optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorPeer {
    pub price: Price,
    pub rating: Option<Rating>,
    pub page_count: Option<i32>,
}

/// Summary statistics over a title's competitors.
///
/// An empty summary (count 0) is a valid outcome, not an error; callers
/// must branch on it explicitly rather than divide by zero.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompetitorSummary {
    count: usize,
    prices: Vec<Price>,
    ratings: Vec<Rating>,
    page_counts: Vec<i32>,
}

impl CompetitorSummary {
    /// The zero-competitor summary.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reduce fetched peers to summary statistics, omitting absent
    /// ratings and page counts.
    #[must_use]
    pub fn from_peers(peers: &[CompetitorPeer]) -> Self {
        Self {
            count: peers.len(),
            prices: peers.iter().map(|p| p.price).collect(),
            ratings: peers.iter().filter_map(|p| p.rating).collect(),
            page_counts: peers.iter().filter_map(|p| p.page_count).collect(),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn mean_price(&self) -> Option<Decimal> {
        mean(&self.prices)
    }

    /// Mean rating over the competitors that have one. `None` when no
    /// competitor is rated; the suggestion calculator applies its own
    /// benchmark default in that case.
    #[must_use]
    pub fn mean_rating(&self) -> Option<Decimal> {
        mean(&self.ratings)
    }

    #[must_use]
    pub fn mean_page_count(&self) -> Option<Decimal> {
        if self.page_counts.is_empty() {
            return None;
        }
        let sum: i64 = self.page_counts.iter().map(|&p| i64::from(p)).sum();
        Some(Decimal::from(sum) / Decimal::from(self.page_counts.len()))
    }

    /// Observed (min, max) competitor price.
    #[must_use]
    pub fn price_range(&self) -> Option<(Decimal, Decimal)> {
        let min = self.prices.iter().min()?;
        let max = self.prices.iter().max()?;
        Some((*min, *max))
    }
}

fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().sum();
    Some(sum / Decimal::from(values.len()))
}

/// Fetch and summarize the competitors of `title`.
///
/// Competitors are all *other* titles whose category contains the target's
/// primary tag as a case-sensitive substring and whose current price is
/// present. An empty category yields the empty summary without touching
/// the store.
pub fn aggregate<S: CatalogStore + ?Sized>(store: &S, title: &Title) -> Result<CompetitorSummary> {
    match title.primary_tag() {
        None => Ok(CompetitorSummary::empty()),
        Some(tag) => {
            let peers = store.find_competitors(tag, title.id)?;
            Ok(CompetitorSummary::from_peers(&peers))
        }
    }
}
