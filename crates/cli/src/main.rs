use crate::{
    env::{EnvManager, Settings},
    error::CliError,
};
use clap::Parser;
use commands::Commands;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod env;
mod error;
mod handlers;
mod output;

#[derive(Parser)]
#[command(
    name = "training-events",
    version = "0.1.0",
    about = "Search filters and event management for employee training events"
)]
struct Cli {
    #[arg(long, global = true, help = "Load environment variables from this .env file")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut env = EnvManager::from_system();
    if let Some(path) = &cli.env_file {
        env.load_from_file(path)?;
        info!("Loaded environment from {}", path.display());
    }
    let settings = Settings::from_env(&env)?;

    match cli.command {
        Commands::Filter { query, dialect } => {
            let filter = handlers::generate_filter(&query, dialect, &settings).await?;
            println!("{filter}");
        }
        Commands::Search {
            query,
            records,
            output,
        } => {
            let selected = handlers::search_records(&query, &records, &settings).await?;
            match output {
                Some(path) => output::write_json(&selected, &path).await?,
                None => output::print_json(&selected)?,
            }
        }
        Commands::Validate { filter } => {
            let report = handlers::validate_filter(&filter)?;
            output::print_json(&report)?;
        }
        Commands::Menu { event, at } => {
            let menu = handlers::event_menu(&event, at).await?;
            output::print_json(&menu)?;
        }
    }

    Ok(())
}
