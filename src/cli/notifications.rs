//! Handlers for the `notifications` command group.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{NotificationListArgs, NotificationReadArgs, NotificationsCommand};
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

#[derive(Tabled)]
struct NotificationLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Read")]
    read: String,
    #[tabled(rename = "When")]
    when: String,
}

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, command: &NotificationsCommand) -> Result<()> {
    match command {
        NotificationsCommand::List(args) => list(tracker, args),
        NotificationsCommand::Read(args) => mark_read(tracker, args),
    }
}

fn list<S: CatalogStore>(tracker: &Tracker<S>, args: &NotificationListArgs) -> Result<()> {
    let items = tracker.notifications(args.limit, args.unread)?;

    if items.is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    let lines: Vec<NotificationLine> = items
        .iter()
        .map(|item| NotificationLine {
            id: item.notification.id.to_string(),
            title: item.title_name.clone(),
            message: item.notification.message.clone(),
            kind: item.notification.kind.to_string(),
            read: if item.notification.read { "yes" } else { "no" }.to_string(),
            when: item.notification.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    println!("{}", Table::new(lines).with(Style::rounded()));
    Ok(())
}

fn mark_read<S: CatalogStore>(tracker: &Tracker<S>, args: &NotificationReadArgs) -> Result<()> {
    tracker.mark_notification_read(args.id)?;
    println!("{} notification {} marked read", "✓".green(), args.id);
    Ok(())
}
