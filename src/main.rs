mod commands;
mod config;
mod provider;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use monthboard_core::month::Month;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "monthboard")]
#[command(about = "Render your calendars as a month grid in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one month and exit
    Show {
        /// Month to render (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Only show these calendars (by id)
        #[arg(short, long)]
        calendar: Vec<String>,
    },
    /// Redraw the board on a refresh interval
    Watch {
        /// Month to pin (YYYY-MM); follows the current month if omitted
        #[arg(short, long)]
        month: Option<String>,

        /// Seconds between refreshes (defaults to the configured value)
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// List the provider's calendars
    Calendars,
    /// List today's events
    Today,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Show { month, calendar } => {
            let month = match month.as_deref() {
                Some(s) => Month::from_arg(s).map_err(|e| anyhow::anyhow!(e))?,
                None => Month::current(),
            };
            commands::show::run(&config, month, calendar).await
        }
        Commands::Watch { month, interval } => {
            let pinned = month
                .as_deref()
                .map(Month::from_arg)
                .transpose()
                .map_err(|e| anyhow::anyhow!(e))?;
            commands::watch::run(&config, pinned, interval).await
        }
        Commands::Calendars => commands::calendars::run(&config).await,
        Commands::Today => commands::today::run(&config).await,
    }
}
