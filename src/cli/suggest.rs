//! Handler for the `suggest` command.

use owo_colors::OwoColorize;

use super::output::rule;
use super::SuggestArgs;
use crate::error::{Error, Result};
use crate::service::Tracker;
use crate::store::CatalogStore;

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &SuggestArgs) -> Result<()> {
    let title = tracker.title(args.id)?;
    let suggestion = tracker.suggest_price(args.id)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&suggestion).map_err(|e| Error::Parse(e.to_string()))?
        );
        return Ok(());
    }

    let analysis = &suggestion.analysis;

    println!();
    println!("  Price suggestion for {}", title.name.bold());
    println!("  {}", rule());
    println!(
        "    Suggested:    {}",
        format!("${:.2}", suggestion.suggested).green().bold()
    );
    println!(
        "    Band:         ${:.2} - ${:.2}",
        suggestion.min, suggestion.max
    );
    println!();
    println!("    Competitors:  {}", analysis.competitor_count);
    if let Some(avg_price) = analysis.avg_competitor_price {
        println!("    Avg price:    ${avg_price:.2}");
    }
    if let Some(avg_rating) = analysis.avg_competitor_rating {
        println!("    Avg rating:   {avg_rating:.2}");
    }
    if let Some(range) = &analysis.price_range {
        println!("    Price range:  {range}");
    }
    println!();
    println!("    {}", analysis.reasoning.dimmed());
    println!();
    Ok(())
}
