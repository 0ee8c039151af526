//! Terminal frontend for the catshelf list screen.
//!
//! # Responsibility
//! - Wire the screen controller, store, and adapter against a real SQLite
//!   file for the `list` flow.
//! - Provide the entry-creation flow (`add`) through the service layer.

use catshelf_core::db::open_db;
use catshelf_core::{
    default_log_level, init_logging, CatService, ListScreenConfig, ListScreenController,
    ScreenState, SqliteCatRepository, SqliteCatStore, TextListAdapter,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(name = "catshelf", version, about = "Local cat record list")]
struct Cli {
    /// Path to the SQLite database file.
    #[arg(long, default_value = "catshelf.db")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging stays off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every stored cat, oldest first.
    List,
    /// Add a cat record.
    Add {
        /// Display name for the new cat.
        name: String,
        /// Age in whole years.
        #[arg(long, default_value_t = 0)]
        age: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = log_dir
            .to_str()
            .ok_or("log directory must be valid UTF-8")?;
        init_logging(&level, log_dir)?;
    }

    match cli.command {
        Command::List => list(&cli.db),
        Command::Add { name, age } => add(&cli.db, &name, age),
    }
}

fn list(db_path: &Path) -> Result<(), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let store = Arc::new(SqliteCatStore::new(conn));
    let mut controller =
        ListScreenController::new(store, TextListAdapter::new(), ListScreenConfig::default());

    controller.activate();
    controller.wait_for_fetch(FETCH_TIMEOUT);

    let result = match controller.state() {
        ScreenState::Loaded => {
            let count = controller.cats().len();
            if count == 0 {
                println!("(no cats)");
            } else {
                println!("{}", controller.adapter_mut().render());
            }
            println!("{count} cat(s)");
            Ok(())
        }
        ScreenState::LoadFailed => Err("failed to load cats; see log for details".into()),
        _ => Err("timed out waiting for the cat fetch".into()),
    };

    controller.deactivate();
    result
}

fn add(db_path: &Path, name: &str, age: u32) -> Result<(), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let service = CatService::new(SqliteCatRepository::new(&conn));
    let id = service.create_cat(name, age)?;
    println!("created cat {id}");
    Ok(())
}
