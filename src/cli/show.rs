//! Handler for the `show` command.

use owo_colors::OwoColorize;
use serde::Serialize;

use super::output::{fmt_opt, fmt_price, fmt_rating, rule};
use super::ShowArgs;
use crate::domain::{Snapshot, Title};
use crate::error::{Error, Result};
use crate::service::Tracker;
use crate::store::CatalogStore;

#[derive(Serialize)]
struct ShowPayload<'a> {
    title: &'a Title,
    history: &'a [Snapshot],
}

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &ShowArgs) -> Result<()> {
    let (title, history) = tracker.title_with_history(args.id)?;

    if args.json {
        let payload = ShowPayload {
            title: &title,
            history: &history,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(|e| Error::Parse(e.to_string()))?
        );
        return Ok(());
    }

    println!();
    println!("  {} by {}", title.name.bold(), title.author);
    println!("  {}", rule());
    println!("    Price:        {}", fmt_price(title.current_price));
    println!(
        "    Rating:       {} ({} ratings)",
        fmt_rating(title.rating),
        title.rating_count
    );
    println!("    Pages:        {}", fmt_opt(title.page_count));
    println!("    Category:     {}", fmt_opt(Some(&title.category).filter(|c| !c.is_empty())));
    println!("    Publisher:    {}", fmt_opt(title.publisher.as_deref()));
    println!("    Published:    {}", fmt_opt(title.published_date.as_deref()));
    println!("    External id:  {}", fmt_opt(title.external_id.as_deref()));
    println!("    Added:        {}", title.added_at.format("%Y-%m-%d %H:%M"));

    println!();
    println!("  History ({} snapshots)", history.len());
    println!("  {}", rule());
    for snapshot in &history {
        println!(
            "    {}  {:>8}  rating {}  ({} ratings)",
            snapshot.captured_at.format("%Y-%m-%d %H:%M"),
            fmt_price(snapshot.price),
            fmt_rating(snapshot.rating),
            snapshot.rating_count
        );
    }
    println!();
    Ok(())
}
