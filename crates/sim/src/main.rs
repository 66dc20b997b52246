//! Demonstration driver for the boss decision engine.
//!
//! Run with: `boss-sim run` (built-in encounter) or
//! `boss-sim run --config boss.toml --encounter fight.ron --format json`.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{DefaultConfig, Run};

/// Boss decision engine playground
#[derive(Parser)]
#[command(name = "boss-sim")]
#[command(about = "Step scripted encounters through the boss decision engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run an encounter and print one command per frame
    Run(Run),

    /// Print the default boss configuration as TOML
    DefaultConfig(DefaultConfig),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG and BOSS_SIM_* overrides)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::DefaultConfig(cmd) => cmd.execute(),
    }
}
