//! Handler for the `update` command.

use owo_colors::OwoColorize;

use super::output::{fmt_price, fmt_rating};
use super::UpdateArgs;
use crate::domain::MarketUpdate;
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &UpdateArgs) -> Result<()> {
    let update = MarketUpdate {
        price: args.price,
        rating: args.rating,
        rating_count: args.rating_count,
    };

    let outcome = tracker.record_update(args.id, update)?;
    println!(
        "{} {} now at {} / rating {}",
        "✓".green(),
        outcome.title.name.bold(),
        fmt_price(outcome.title.current_price),
        fmt_rating(outcome.title.rating)
    );

    if outcome.notifications.is_empty() {
        println!("  no significant movement");
    } else {
        for notification in &outcome.notifications {
            println!("  {} {}", "!".yellow(), notification.message);
        }
    }
    Ok(())
}
