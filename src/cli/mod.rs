//! Command-line interface definitions.

pub mod add;
pub mod export;
pub mod list;
pub mod notifications;
pub mod output;
pub mod profit;
pub mod remove;
pub mod show;
pub mod stats;
pub mod suggest;
pub mod update;
pub mod watchlist;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::{NotificationId, TitleId, WatchlistId};
use crate::pricing::Format;

/// Shelfwatch - price tracking and pricing advice for self-published titles.
#[derive(Parser, Debug)]
#[command(name = "shelfwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the catalog database path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a title to the catalog
    Add(AddArgs),

    /// List tracked titles
    List(ListArgs),

    /// Show a title with its snapshot history
    Show(ShowArgs),

    /// Record a price/rating update for a title
    Update(UpdateArgs),

    /// Remove a title and, with it, its history and notifications
    Remove(RemoveArgs),

    /// Suggest a list price from competitor statistics
    Suggest(SuggestArgs),

    /// Compute per-sale profit for a price and format
    Profit(ProfitArgs),

    /// Inspect change notifications
    #[command(subcommand)]
    Notifications(NotificationsCommand),

    /// Manage watchlists
    #[command(subcommand)]
    Watchlist(WatchlistCommand),

    /// Show catalog statistics
    Stats,

    /// Export the catalog as CSV
    Export(ExportArgs),
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Title name
    #[arg(long)]
    pub name: String,

    /// Author
    #[arg(long)]
    pub author: String,

    /// Current list price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Current rating (0-5)
    #[arg(long)]
    pub rating: Option<Decimal>,

    /// Number of ratings
    #[arg(long, default_value = "0")]
    pub rating_count: i32,

    /// Page count
    #[arg(long)]
    pub pages: Option<i32>,

    /// Comma-joined category tags; the first tag drives competitor matching
    #[arg(long, default_value = "")]
    pub category: String,

    /// Publisher
    #[arg(long)]
    pub publisher: Option<String>,

    /// Publication date as reported by the catalog
    #[arg(long)]
    pub published: Option<String>,

    /// External catalog identifier (ISBN or volume id)
    #[arg(long)]
    pub external_id: Option<String>,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Title id
    pub id: TitleId,

    /// Emit JSON instead of formatted output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `update` subcommand.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Title id
    pub id: TitleId,

    /// New list price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// New rating (0-5)
    #[arg(long)]
    pub rating: Option<Decimal>,

    /// New rating count
    #[arg(long)]
    pub rating_count: Option<i32>,
}

/// Arguments for the `remove` subcommand.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Title id
    pub id: TitleId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `suggest` subcommand.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Title id
    pub id: TitleId,

    /// Emit JSON instead of formatted output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `profit` subcommand.
#[derive(Parser, Debug)]
pub struct ProfitArgs {
    /// List price to evaluate
    pub price: Decimal,

    /// Publication format: ebook, paperback, or hardcover
    #[arg(long, default_value = "ebook")]
    pub format: Format,

    /// Ebook file size in megabytes
    #[arg(long)]
    pub file_size: Option<Decimal>,

    /// Per-unit printing cost for print formats
    #[arg(long)]
    pub printing_cost: Option<Decimal>,

    /// Emit JSON instead of formatted output
    #[arg(long)]
    pub json: bool,
}

/// Subcommands for `shelfwatch notifications`.
#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// List recent notifications
    List(NotificationListArgs),

    /// Mark a notification as read
    Read(NotificationReadArgs),
}

/// Arguments for `notifications list`.
#[derive(Parser, Debug)]
pub struct NotificationListArgs {
    /// Maximum number of notifications to show
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: i64,

    /// Show unread notifications only
    #[arg(long)]
    pub unread: bool,
}

/// Arguments for `notifications read`.
#[derive(Parser, Debug)]
pub struct NotificationReadArgs {
    /// Notification id
    pub id: NotificationId,
}

/// Subcommands for `shelfwatch watchlist`.
#[derive(Subcommand, Debug)]
pub enum WatchlistCommand {
    /// Create a watchlist
    Create(WatchlistCreateArgs),

    /// List watchlists with member counts
    List,

    /// Show the titles in a watchlist
    Show(WatchlistShowArgs),

    /// Add a title to a watchlist
    Add(WatchlistMemberArgs),

    /// Remove a title from a watchlist
    Remove(WatchlistMemberArgs),

    /// Delete a watchlist (member titles survive)
    Delete(WatchlistDeleteArgs),
}

/// Arguments for `watchlist create`.
#[derive(Parser, Debug)]
pub struct WatchlistCreateArgs {
    /// Watchlist name (unique)
    pub name: String,

    /// Optional description
    #[arg(long, default_value = "")]
    pub description: String,
}

/// Arguments for `watchlist show`.
#[derive(Parser, Debug)]
pub struct WatchlistShowArgs {
    /// Watchlist id
    pub id: WatchlistId,
}

/// Arguments for watchlist membership changes.
#[derive(Parser, Debug)]
pub struct WatchlistMemberArgs {
    /// Watchlist id
    pub id: WatchlistId,

    /// Title id
    #[arg(long)]
    pub title: TitleId,
}

/// Arguments for `watchlist delete`.
#[derive(Parser, Debug)]
pub struct WatchlistDeleteArgs {
    /// Watchlist id
    pub id: WatchlistId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` subcommand.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
