//! Step an encounter through the engine and print each frame.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use boss_content::{ConfigLoader, EncounterLoader, EncounterScript};
use boss_core::BossConfig;
use boss_sim::Simulation;
use boss_sim::logging::setup_logging;
use clap::{Parser, ValueEnum};

/// Output encoding for frame records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per frame
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Run an encounter and print the boss's command for every frame
#[derive(Parser, Debug)]
pub struct Run {
    /// Boss configuration (TOML). Defaults apply to missing keys.
    #[arg(long, env = "BOSS_SIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Encounter script (RON). Uses the built-in demo when omitted.
    #[arg(long, env = "BOSS_SIM_ENCOUNTER")]
    pub encounter: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Never confirm actions, so cooldowns never start
    #[arg(long)]
    pub no_commit: bool,

    /// Write logs to a file in this directory instead of stderr
    #[arg(long, env = "BOSS_SIM_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let _guard = setup_logging(self.log_dir.as_deref())?;

        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => BossConfig::default(),
        };
        let script = match &self.encounter {
            Some(path) => EncounterLoader::load(path)?,
            None => EncounterScript::demo(),
        };
        tracing::info!(
            frames = script.frames,
            dt = script.dt_seconds,
            threats = script.threats.len(),
            commit = !self.no_commit,
            "starting encounter"
        );

        let mut simulation = Simulation::new(config, script);
        if self.no_commit {
            simulation = simulation.without_commits();
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for record in simulation.by_ref() {
            let line = match self.format {
                OutputFormat::Text => record.to_text(),
                OutputFormat::Json => serde_json::to_string(&record)
                    .context("Failed to serialize frame record")?,
            };
            writeln!(out, "{line}").context("Failed to write frame record")?;
        }
        out.flush().context("Failed to flush output")?;

        tracing::info!(phase = %simulation.engine().phase(), "encounter finished");
        Ok(())
    }
}
