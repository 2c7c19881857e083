//! Handlers for the `watchlist` command group.

use dialoguer::Confirm;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::output::{fmt_price, fmt_rating};
use super::{
    WatchlistCommand, WatchlistCreateArgs, WatchlistDeleteArgs, WatchlistMemberArgs,
    WatchlistShowArgs,
};
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

#[derive(Tabled)]
struct WatchlistLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Titles")]
    titles: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct MemberLine {
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
}

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, command: &WatchlistCommand) -> Result<()> {
    match command {
        WatchlistCommand::Create(args) => create(tracker, args),
        WatchlistCommand::List => list(tracker),
        WatchlistCommand::Show(args) => show(tracker, args),
        WatchlistCommand::Add(args) => add(tracker, args),
        WatchlistCommand::Remove(args) => remove(tracker, args),
        WatchlistCommand::Delete(args) => delete(tracker, args),
    }
}

fn create<S: CatalogStore>(tracker: &Tracker<S>, args: &WatchlistCreateArgs) -> Result<()> {
    let watchlist = tracker.create_watchlist(&args.name, &args.description)?;
    println!(
        "{} created watchlist {} (id {})",
        "✓".green(),
        watchlist.name.bold(),
        watchlist.id
    );
    Ok(())
}

fn list<S: CatalogStore>(tracker: &Tracker<S>) -> Result<()> {
    let summaries = tracker.watchlists()?;
    if summaries.is_empty() {
        println!("No watchlists yet. Create one with `shelfwatch watchlist create`.");
        return Ok(());
    }

    let lines: Vec<WatchlistLine> = summaries
        .iter()
        .map(|s| WatchlistLine {
            id: s.watchlist.id.to_string(),
            name: s.watchlist.name.clone(),
            titles: s.title_count.to_string(),
            description: s.watchlist.description.clone(),
        })
        .collect();
    println!("{}", Table::new(lines).with(Style::rounded()));
    Ok(())
}

fn show<S: CatalogStore>(tracker: &Tracker<S>, args: &WatchlistShowArgs) -> Result<()> {
    let titles = tracker.watchlist_titles(args.id)?;
    if titles.is_empty() {
        println!("Watchlist {} is empty.", args.id);
        return Ok(());
    }

    let lines: Vec<MemberLine> = titles
        .iter()
        .map(|t| MemberLine {
            id: t.id.to_string(),
            name: t.name.clone(),
            author: t.author.clone(),
            price: fmt_price(t.current_price),
            rating: fmt_rating(t.rating),
        })
        .collect();
    println!("{}", Table::new(lines).with(Style::rounded()));
    Ok(())
}

fn add<S: CatalogStore>(tracker: &Tracker<S>, args: &WatchlistMemberArgs) -> Result<()> {
    tracker.add_to_watchlist(args.id, args.title)?;
    println!("{} title {} added to watchlist {}", "✓".green(), args.title, args.id);
    Ok(())
}

fn remove<S: CatalogStore>(tracker: &Tracker<S>, args: &WatchlistMemberArgs) -> Result<()> {
    if tracker.remove_from_watchlist(args.id, args.title)? {
        println!("{} title {} removed from watchlist {}", "✓".green(), args.title, args.id);
    } else {
        println!("title {} was not in watchlist {}", args.title, args.id);
    }
    Ok(())
}

fn delete<S: CatalogStore>(tracker: &Tracker<S>, args: &WatchlistDeleteArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete watchlist {}?", args.id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("aborted");
            return Ok(());
        }
    }
    tracker.delete_watchlist(args.id)?;
    println!("{} watchlist {} deleted", "✓".green(), args.id);
    Ok(())
}
