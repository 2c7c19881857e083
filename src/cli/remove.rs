//! Handler for the `remove` command.

use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::RemoveArgs;
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &RemoveArgs) -> Result<()> {
    let title = tracker.title(args.id)?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove '{}' and all of its history and notifications?",
                title.name
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("aborted");
            return Ok(());
        }
    }

    tracker.remove_title(args.id)?;
    println!("{} removed {}", "✓".green(), title.name.bold());
    Ok(())
}
