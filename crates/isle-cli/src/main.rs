//! Isle CLI - count islands in land/water grids and report repository stats.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{CountArgs, RandomArgs, StatsArgs};

/// Grid island analysis and repository stats reporting
#[derive(Parser, Debug)]
#[command(name = "isle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count islands in a grid file
    Count(CountArgs),

    /// Generate a random grid and analyze it
    Random(RandomArgs),

    /// Fetch and report repository stats
    Stats(StatsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Count(args) => commands::count(args),
        Commands::Random(args) => commands::random(args),
        Commands::Stats(args) => commands::stats(args).await,
    }
}
