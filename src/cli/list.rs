//! Handler for the `list` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::output::{fmt_opt, fmt_price, fmt_rating};
use super::ListArgs;
use crate::domain::Title;
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

#[derive(Tabled)]
struct TitleLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Pages")]
    pages: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl From<&Title> for TitleLine {
    fn from(title: &Title) -> Self {
        Self {
            id: title.id.to_string(),
            name: title.name.clone(),
            author: title.author.clone(),
            price: fmt_price(title.current_price),
            rating: fmt_rating(title.rating),
            pages: fmt_opt(title.page_count),
            category: title.category.clone(),
        }
    }
}

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &ListArgs) -> Result<()> {
    let titles = tracker.list_titles()?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&titles).map_err(|e| crate::error::Error::Parse(e.to_string()))?
        );
        return Ok(());
    }

    if titles.is_empty() {
        println!("No titles tracked yet. Add one with `shelfwatch add`.");
        return Ok(());
    }

    let lines: Vec<TitleLine> = titles.iter().map(TitleLine::from).collect();
    println!("{}", Table::new(lines).with(Style::rounded()));
    Ok(())
}
