//! Subcommand implementations.

use anyhow::{Context, Result};
use clap::Args;
use isle_core::{GridGenConfig, StatsConfig};
use isle_grid::{analyze, count_islands, island_sizes, Grid};
use isle_stats::{export, Report, StatsClient};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Grid file: one row per line, 1 = land, 0 = water
    pub path: PathBuf,

    /// Also print the size of each island
    #[arg(long)]
    pub sizes: bool,
}

pub fn count(args: CountArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let grid = Grid::parse(&text)?;

    info!("Loaded {}x{} grid", grid.width, grid.height);
    println!("{}", count_islands(&grid));

    if args.sizes {
        for (i, size) in island_sizes(&grid).iter().enumerate() {
            println!("island {}: {} cells", i + 1, size);
        }
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Grid width
    #[arg(long, default_value_t = 32)]
    pub width: i32,

    /// Grid height
    #[arg(long, default_value_t = 32)]
    pub height: i32,

    /// Probability that a cell is land
    #[arg(long, default_value_t = 0.35)]
    pub density: f32,

    /// Seed for reproducible grids
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

pub fn random(args: RandomArgs) -> Result<()> {
    let config = GridGenConfig {
        width: args.width,
        height: args.height,
        land_density: args.density,
        seed: args.seed,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let grid = Grid::random(&config, &mut rng);

    print!("{}", grid);
    let stats = analyze(&grid);
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Repository owner login
    #[arg(long)]
    pub owner: String,

    /// Repository name
    #[arg(long)]
    pub repo: String,

    /// API token for authenticated requests
    #[arg(long, env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// Write the JSON report to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the contributors CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub async fn stats(args: StatsArgs) -> Result<()> {
    let config = StatsConfig {
        owner: args.owner,
        repo: args.repo,
        token: args.token,
        ..Default::default()
    };

    let client = StatsClient::new(config.clone())?;
    let prs = client.fetch_pull_requests().await?;
    let contributors = client.fetch_contributors().await?;

    let report = Report::build(&config, &prs, &contributors);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = args.json {
        export::write_json(&report, path)?;
    }
    if let Some(path) = args.csv {
        export::write_contributors_csv(&contributors, path)?;
    }

    Ok(())
}
