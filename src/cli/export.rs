//! Handler for the `export` command.

use owo_colors::OwoColorize;

use super::ExportArgs;
use crate::error::Result;
use crate::service::Tracker;
use crate::store::CatalogStore;

pub fn execute<S: CatalogStore>(tracker: &Tracker<S>, args: &ExportArgs) -> Result<()> {
    let csv = tracker.export_csv()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("{} wrote {}", "✓".green(), path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}
