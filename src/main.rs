mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lineup_core::config::LineupConfig;
use lineup_core::Lineup;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Browse a festival lineup, plan favorites, and spot schedule clashes")]
struct Cli {
    /// Override the lineup dataset file
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the festival days
    Days,
    /// Chronological schedule listing
    Schedule {
        /// Only this festival day
        #[arg(short, long)]
        day: Option<String>,

        /// Case-insensitive artist name filter
        #[arg(short, long)]
        search: Option<String>,

        /// Only sets tagged with this genre
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Render one day as a time-by-stage grid
    Timetable {
        /// Festival day (defaults to the first)
        day: Option<String>,

        /// Minutes per grid row (overrides config)
        #[arg(short, long)]
        quantum: Option<u32>,
    },
    /// Toggle a favorite by performance id or artist name
    Fav {
        query: String,
    },
    /// List favorites and their clashes
    Favorites,
    /// Export favorites as an .ics calendar with reminders
    Export {
        /// Output file path
        #[arg(short, long, default_value = "lineup-favorites.ics")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = LineupConfig::load()?;
    let data_path = cli.data.unwrap_or_else(|| config.data_path());
    let lineup = Lineup::load(&data_path)
        .with_context(|| format!("Failed to load lineup data from {}", data_path.display()))?;

    match cli.command {
        Commands::Days => commands::days::run(&lineup),
        Commands::Schedule { day, search, genre } => {
            commands::schedule::run(&lineup, day, search, genre)
        }
        Commands::Timetable { day, quantum } => {
            commands::timetable::run(&lineup, &config, day, quantum)
        }
        Commands::Fav { query } => commands::fav::run(&lineup, &query),
        Commands::Favorites => commands::favorites::run(&lineup),
        Commands::Export { output } => commands::export::run(&lineup, &output),
    }
}
