//! Handler for the `stats` command.

use super::output::rule;
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>) -> Result<()> {
    let stats = tracker.stats()?;

    println!();
    println!("  Catalog");
    println!("  {}", rule());
    println!("    Titles:               {:>8}", stats.total_titles);
    println!(
        "    Avg price:            {:>8}",
        stats
            .avg_price
            .map(|p| format!("${p:.2}"))
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "    Avg rating:           {:>8}",
        stats
            .avg_rating
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "-".to_string())
    );
    println!("    Unread notifications: {:>8}", stats.unread_notifications);
    println!();
    Ok(())
}
