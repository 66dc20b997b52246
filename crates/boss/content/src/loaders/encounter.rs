//! Encounter script loader.

use std::path::Path;

use anyhow::{Context, ensure};

use crate::encounter::EncounterScript;
use crate::loaders::{LoadResult, read_file};

/// Loader for encounter scripts from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    pub fn load(path: &Path) -> LoadResult<EncounterScript> {
        let content = read_file(path)?;
        let script = Self::parse(&content)
            .with_context(|| format!("Invalid encounter script {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            frames = script.frames,
            threats = script.threats.len(),
            "loaded encounter script"
        );
        Ok(script)
    }

    /// Parse RON text and reject scripts that cannot be stepped.
    pub fn parse(content: &str) -> LoadResult<EncounterScript> {
        let script: EncounterScript =
            ron::from_str(content).context("Failed to parse encounter RON")?;
        ensure!(
            script.dt_seconds.is_finite() && script.dt_seconds > 0.0,
            "dt_seconds must be positive, got {}",
            script.dt_seconds
        );
        if let Some(key) = script.keyframes.iter().find(|key| key.frame >= script.frames) {
            tracing::warn!(frame = key.frame, frames = script.frames, "keyframe never reached");
        }
        Ok(script)
    }
}
