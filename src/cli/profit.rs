//! Handler for the `profit` command.

use owo_colors::OwoColorize;

use super::output::rule;
use super::ProfitArgs;
use crate::error::{Error, Result};
use crate::pricing::CostInputs;
use crate::service::Tracker;
use crate::store::CatalogStore;

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &ProfitArgs) -> Result<()> {
    let inputs = CostInputs {
        file_size_mb: args.file_size,
        printing_cost: args.printing_cost,
    };

    let breakdown = tracker.profit(args.price, args.format, &inputs)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&breakdown).map_err(|e| Error::Parse(e.to_string()))?
        );
        return Ok(());
    }

    println!();
    println!("  Profit at ${:.2} ({})", args.price, args.format);
    println!("  {}", rule());
    println!(
        "    Per sale:     {}",
        format!("${:.2}", breakdown.profit_per_sale).green().bold()
    );
    println!("    Royalty:      {}%", breakdown.royalty_rate_percent);
    if let Some(delivery) = breakdown.delivery_cost {
        println!("    Delivery:     ${delivery:.2}");
    }
    if let Some(printing) = breakdown.printing_cost {
        println!("    Printing:     ${printing:.2}");
    }
    println!(
        "    Recommended:  ${:.2} - ${:.2}",
        breakdown.recommended_range.min, breakdown.recommended_range.max
    );
    println!("    {}", breakdown.recommended_range.reason.dimmed());
    println!();
    Ok(())
}
