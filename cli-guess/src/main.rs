use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use numguess::error::logging;
use numguess::Difficulty;

mod app;
mod config;
mod render;
mod repl;

use app::GameApp;
use config::{Overrides, ReplConfig};

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "Guess the secret number in as few attempts as you can")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting difficulty (easy, medium, hard)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Seed for target selection, for reproducible rounds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Timer refresh interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env().map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    let cli = Cli::parse();
    let overrides = Overrides {
        difficulty: cli.difficulty,
        seed: cli.seed,
        tick_ms: cli.tick_ms,
    };
    let config = config::load(cli.config.as_ref(), &overrides)?;

    let mut app = GameApp::new(config, ReplConfig::default())?;
    app.run().await?;

    Ok(())
}
