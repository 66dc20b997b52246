//! Print the default boss configuration.

use anyhow::Result;
use boss_content::ConfigLoader;
use boss_core::BossConfig;
use clap::Parser;

/// Print the default configuration as TOML, e.g. to seed a tuning file
#[derive(Parser, Debug)]
pub struct DefaultConfig {}

impl DefaultConfig {
    pub fn execute(self) -> Result<()> {
        print!("{}", ConfigLoader::to_toml(&BossConfig::default())?);
        Ok(())
    }
}
