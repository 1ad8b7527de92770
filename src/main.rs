mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use agenda_core::{AgendaConfig, EventStore};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Record, list and remove events in your personal agenda")]
struct Cli {
    /// Events file to use instead of the configured data_file
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all events ordered by date and time (default)
    List,
    /// Add an event (prompts for the fields when no description is given)
    Add {
        description: Option<String>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM, 24h), defaults to 12:00
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Remove an event by its number in `agenda list`
    Remove {
        /// Row number as shown by `agenda list` (prompts when omitted)
        number: Option<usize>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show config and events file locations
    Config {
        /// Store events in this file from now on
        #[arg(long)]
        set_data_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    utils::logging::init()?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {
            let store = open_store(cli.file)?;
            commands::list::run(&store)
        }
        Commands::Add {
            description,
            date,
            time,
        } => {
            let mut store = open_store(cli.file)?;
            commands::add::run(&mut store, description, date, time)
        }
        Commands::Remove { number, yes } => {
            let mut store = open_store(cli.file)?;
            commands::remove::run(&mut store, number, yes)
        }
        Commands::Config { set_data_file } => commands::config::run(cli.file, set_data_file),
    }
}

/// Open the event store at `--file`, or at the configured data_file.
fn open_store(file: Option<PathBuf>) -> Result<EventStore> {
    let path = match file {
        Some(path) => path,
        None => AgendaConfig::load()?.data_path(),
    };

    Ok(EventStore::load(path))
}
