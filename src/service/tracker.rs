//! Orchestration of the catalog store and the pricing engine.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::detector::DetectorConfig;
use crate::domain::{
    CatalogStats, MarketUpdate, NotificationFeedItem, NotificationId, Snapshot, Title, TitleDraft,
    TitleId, Watchlist, WatchlistId, WatchlistSummary,
};
use crate::error::{Error, Result};
use crate::pricing::{
    aggregate, calculate_profit, suggest, CostInputs, Format, PriceSuggestion, ProfitBreakdown,
    ProfitConfig, SuggestionConfig,
};
use crate::store::{CatalogStore, UpdateOutcome};

/// The tracker wires a catalog store to the pricing engine.
///
/// The store handle is injected per instance; engine operations never reach
/// for process-wide state.
pub struct Tracker<S> {
    store: S,
    suggestion: SuggestionConfig,
    detector: DetectorConfig,
    profit: ProfitConfig,
}

impl<S: CatalogStore> Tracker<S> {
    pub fn new(
        store: S,
        suggestion: SuggestionConfig,
        detector: DetectorConfig,
        profit: ProfitConfig,
    ) -> Self {
        Self {
            store,
            suggestion,
            detector,
            profit,
        }
    }

    /// Add a title to the catalog after checking its invariants.
    pub fn add_title(&self, draft: &TitleDraft) -> Result<Title> {
        draft.validate()?;
        let title = self.store.add_title(draft)?;
        info!(id = %title.id, name = %title.name, "title added");
        Ok(title)
    }

    /// Get a title, surfacing a typed not-found error.
    pub fn title(&self, id: TitleId) -> Result<Title> {
        self.store.title(id)?.ok_or(Error::TitleNotFound { id })
    }

    /// A title together with its snapshot history in capture order.
    pub fn title_with_history(&self, id: TitleId) -> Result<(Title, Vec<Snapshot>)> {
        let title = self.title(id)?;
        let history = self.store.history(id)?;
        Ok((title, history))
    }

    pub fn list_titles(&self) -> Result<Vec<Title>> {
        self.store.list_titles()
    }

    pub fn remove_title(&self, id: TitleId) -> Result<()> {
        if !self.store.remove_title(id)? {
            return Err(Error::TitleNotFound { id });
        }
        info!(%id, "title removed");
        Ok(())
    }

    /// The single write path for price/rating updates.
    ///
    /// The store commits field update, snapshot, and any notifications the
    /// change detector produced as one unit.
    pub fn record_update(&self, id: TitleId, update: MarketUpdate) -> Result<UpdateOutcome> {
        let outcome = self.store.record_update(id, &update, &self.detector)?;
        info!(
            %id,
            notifications = outcome.notifications.len(),
            "market update recorded"
        );
        Ok(outcome)
    }

    /// Suggest a list price: store read, competitor aggregation, heuristic.
    pub fn suggest_price(&self, id: TitleId) -> Result<PriceSuggestion> {
        let title = self.title(id)?;
        let summary = aggregate(&self.store, &title)?;
        debug!(%id, competitors = summary.count(), "competitor summary ready");
        Ok(suggest(&title, &summary, &self.suggestion))
    }

    /// Per-sale profit; a pure computation with no store dependency.
    pub fn profit(
        &self,
        price: Decimal,
        format: Format,
        inputs: &CostInputs,
    ) -> Result<ProfitBreakdown> {
        calculate_profit(price, format, inputs, &self.profit).map_err(Error::from)
    }

    pub fn notifications(&self, limit: i64, unread_only: bool) -> Result<Vec<NotificationFeedItem>> {
        self.store.notifications(limit, unread_only)
    }

    pub fn mark_notification_read(&self, id: NotificationId) -> Result<()> {
        if !self.store.mark_notification_read(id)? {
            return Err(Error::NotificationNotFound { id });
        }
        Ok(())
    }

    pub fn stats(&self) -> Result<CatalogStats> {
        self.store.stats()
    }

    pub fn create_watchlist(&self, name: &str, description: &str) -> Result<Watchlist> {
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("watchlist name is required".into()));
        }
        self.store.create_watchlist(name, description)
    }

    pub fn watchlists(&self) -> Result<Vec<WatchlistSummary>> {
        self.store.watchlists()
    }

    pub fn watchlist_titles(&self, id: WatchlistId) -> Result<Vec<Title>> {
        self.store.watchlist_titles(id)
    }

    pub fn add_to_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<()> {
        self.store.add_to_watchlist(watchlist, title)
    }

    pub fn remove_from_watchlist(&self, watchlist: WatchlistId, title: TitleId) -> Result<bool> {
        self.store.remove_from_watchlist(watchlist, title)
    }

    pub fn delete_watchlist(&self, id: WatchlistId) -> Result<()> {
        if !self.store.delete_watchlist(id)? {
            return Err(Error::WatchlistNotFound { id });
        }
        Ok(())
    }

    /// Render the catalog as CSV text, newest titles first.
    pub fn export_csv(&self) -> Result<String> {
        let titles = self.store.list_titles()?;

        let mut csv = String::from(
            "id,external_id,name,author,current_price,rating,rating_count,page_count,category,publisher,published_date,added_at,updated_at\n",
        );
        for t in titles {
            let row = [
                t.id.to_string(),
                t.external_id.unwrap_or_default(),
                t.name,
                t.author,
                t.current_price.map(|p| p.to_string()).unwrap_or_default(),
                t.rating.map(|r| r.to_string()).unwrap_or_default(),
                t.rating_count.to_string(),
                t.page_count.map(|p| p.to_string()).unwrap_or_default(),
                t.category,
                t.publisher.unwrap_or_default(),
                t.published_date.unwrap_or_default(),
                t.added_at.to_rfc3339(),
                t.updated_at.to_rfc3339(),
            ];
            let escaped: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
            csv.push_str(&escaped.join(","));
            csv.push('\n');
        }
        Ok(csv)
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCatalog;
    use rust_decimal_macros::dec;

    fn tracker() -> Tracker<MemoryCatalog> {
        Tracker::new(
            MemoryCatalog::new(),
            SuggestionConfig::default(),
            DetectorConfig::default(),
            ProfitConfig::default(),
        )
    }

    fn draft(name: &str, category: &str, price: Option<Decimal>) -> TitleDraft {
        TitleDraft {
            price,
            category: category.to_string(),
            ..TitleDraft::new(name, "Author")
        }
    }

    #[test]
    fn add_rejects_missing_required_fields() {
        let tracker = tracker();
        let err = tracker.add_title(&TitleDraft::new("", "Author")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn missing_title_is_a_typed_not_found() {
        let tracker = tracker();
        assert!(matches!(
            tracker.title(TitleId::new(1)),
            Err(Error::TitleNotFound { .. })
        ));
        assert!(matches!(
            tracker.suggest_price(TitleId::new(1)),
            Err(Error::TitleNotFound { .. })
        ));
        assert!(matches!(
            tracker.remove_title(TitleId::new(1)),
            Err(Error::TitleNotFound { .. })
        ));
    }

    #[test]
    fn suggest_price_flows_store_aggregation_heuristic() {
        let tracker = tracker();
        let target = tracker
            .add_title(&draft("Target", "Fantasy, Epic", None))
            .unwrap();
        tracker
            .add_title(&draft("Peer A", "Fantasy", Some(dec!(4.00))))
            .unwrap();
        tracker
            .add_title(&draft("Peer B", "Fantasy", Some(dec!(6.00))))
            .unwrap();

        let suggestion = tracker.suggest_price(target.id).unwrap();
        assert_eq!(suggestion.suggested, dec!(5.00));
        assert_eq!(suggestion.analysis.competitor_count, 2);
    }

    #[test]
    fn suggest_price_without_category_uses_page_tiers() {
        let tracker = tracker();
        let mut d = draft("Uncategorized", "", None);
        d.page_count = Some(450);
        let title = tracker.add_title(&d).unwrap();

        let suggestion = tracker.suggest_price(title.id).unwrap();
        assert_eq!(suggestion.suggested, dec!(4.99));
        assert_eq!(suggestion.analysis.competitor_count, 0);
    }

    #[test]
    fn profit_surfaces_price_too_low() {
        let tracker = tracker();
        let err = tracker
            .profit(dec!(1.00), Format::Paperback, &CostInputs::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Pricing(crate::error::PricingError::PriceTooLow { .. })
        ));
    }

    #[test]
    fn csv_export_quotes_comma_joined_categories() {
        let tracker = tracker();
        tracker
            .add_title(&draft("Book", "Fiction, Literary", Some(dec!(4.99))))
            .unwrap();

        let csv = tracker.export_csv().unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("id,external_id,name"));
        let row = lines.next().unwrap();
        assert!(row.contains("\"Fiction, Literary\""));
        assert!(row.contains("4.99"));
    }

    #[test]
    fn csv_field_escaping() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
