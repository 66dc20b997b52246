//! Command implementations for boss-sim
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod default_config;
mod run;

pub use default_config::DefaultConfig;
pub use run::Run;
