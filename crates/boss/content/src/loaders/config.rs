//! Boss configuration loader.

use std::path::Path;

use anyhow::Context;
use boss_core::BossConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for boss configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a `BossConfig` from a TOML file.
    ///
    /// Keys missing from the file keep their default value; unknown keys
    /// are rejected.
    pub fn load(path: &Path) -> LoadResult<BossConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid boss config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded boss config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<BossConfig> {
        let config: BossConfig =
            toml::from_str(content).context("Failed to parse boss config TOML")?;
        if let Err(err) = config.validate() {
            let field = err.field();
            tracing::warn!(field, "boss config rejected");
            return Err(anyhow::Error::new(err)
                .context(format!("Boss config failed validation on `{field}`")));
        }
        Ok(config)
    }

    /// Render a configuration as TOML, e.g. to seed a tuning file.
    pub fn to_toml(config: &BossConfig) -> LoadResult<String> {
        toml::to_string(config).context("Failed to serialize boss config TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, BossConfig::default());
    }

    #[test]
    fn partial_document_overrides_named_keys() {
        let config = ConfigLoader::parse("projectile_speed = 24.0\ndash_distance = 3.0\n").unwrap();
        assert_eq!(config.projectile_speed, 24.0);
        assert_eq!(config.dash_distance, 3.0);
        assert_eq!(config.heal_cooldown_seconds, 14.0);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ConfigLoader::parse("projectile_sped = 24.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("projectile_sped"));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = ConfigLoader::parse("min_spacing_range = 20.0\n").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed validation"), "{message}");
        assert!(message.contains("min_spacing_range"), "{message}");
    }

    #[test]
    fn validation_context_names_the_adjustable_field() {
        let err = ConfigLoader::parse("heal_critical_health_ratio = 0.5
").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Boss config failed validation on `heal_start_health_ratio`"
        );
        let source = err.downcast_ref::<boss_core::ConfigError>().unwrap();
        assert_eq!(source.field(), "heal_start_health_ratio");
    }

    #[test]
    fn rendered_defaults_parse_back() {
        let text = ConfigLoader::to_toml(&BossConfig::default()).unwrap();
        assert!(text.contains("teleport_danger_threshold"));
        assert_eq!(ConfigLoader::parse(&text).unwrap(), BossConfig::default());
    }
}
