//! Encounter playback for the boss decision engine.
//!
//! The `boss-sim` binary is a thin CLI over [`runner::Simulation`]; the
//! library half exists so playback can be exercised from tests.

pub mod logging;
pub mod runner;

pub use runner::{FrameRecord, Simulation};
