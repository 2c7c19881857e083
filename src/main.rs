use anyhow::Context;
use clap::Parser;
use tracing::error;

use shelfwatch::cli::{self, Cli, Commands};
use shelfwatch::config::Config;
use shelfwatch::service::Tracker;
use shelfwatch::store::{create_pool, run_migrations, SqliteCatalog};

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = run(&cli, &config) {
        error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> shelfwatch::error::Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| config.database.path.clone());
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let pool = create_pool(&db_path.to_string_lossy()).context("opening catalog database")?;
    run_migrations(&pool).context("applying migrations")?;

    let tracker = Tracker::new(
        SqliteCatalog::new(pool),
        config.suggestion.clone(),
        config.detector,
        config.profit.clone(),
    );

    match &cli.command {
        Commands::Add(args) => cli::add::execute(&tracker, args)?,
        Commands::List(args) => cli::list::execute(&tracker, args)?,
        Commands::Show(args) => cli::show::execute(&tracker, args)?,
        Commands::Update(args) => cli::update::execute(&tracker, args)?,
        Commands::Remove(args) => cli::remove::execute(&tracker, args)?,
        Commands::Suggest(args) => cli::suggest::execute(&tracker, args)?,
        Commands::Profit(args) => cli::profit::execute(&tracker, args)?,
        Commands::Notifications(command) => cli::notifications::execute(&tracker, command)?,
        Commands::Watchlist(command) => cli::watchlist::execute(&tracker, command)?,
        Commands::Stats => cli::stats::execute(&tracker)?,
        Commands::Export(args) => cli::export::execute(&tracker, args)?,
    }
    Ok(())
}
