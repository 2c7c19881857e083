//! Handler for the `add` command.

use owo_colors::OwoColorize;

use super::AddArgs;
use crate::domain::TitleDraft;
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &AddArgs) -> Result<()> {
    let draft = TitleDraft {
        external_id: args.external_id.clone(),
        name: args.name.clone(),
        author: args.author.clone(),
        price: args.price,
        rating: args.rating,
        rating_count: args.rating_count,
        page_count: args.pages,
        category: args.category.clone(),
        publisher: args.publisher.clone(),
        published_date: args.published.clone(),
    };

    let title = tracker.add_title(&draft)?;
    println!(
        "{} added {} by {} (id {})",
        "✓".green(),
        title.name.bold(),
        title.author,
        title.id
    );
    if title.current_price.is_some() {
        println!("  first snapshot recorded");
    }
    Ok(())
}
