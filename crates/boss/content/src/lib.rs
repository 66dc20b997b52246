//! Data-driven boss content and loaders.
//!
//! This crate provides loaders for the engine's data files:
//! - Boss tuning (`BossConfig`, data-driven via TOML)
//! - Encounter scripts (data-driven via RON)
//!
//! Content is consumed by drivers and tools; `boss-core` never reads files.

pub mod encounter;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::{EncounterScript, Keyframe};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, EncounterLoader, LoadResult};
