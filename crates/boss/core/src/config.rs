//! Tunable parameters for the boss decision engine.
//!
//! [`BossConfig`] is constructed once and never mutated by the engine. The
//! engine does not validate it: inverted ranges or thresholds are an
//! unchecked precondition of [`crate::BossEngine::update`] and produce
//! deterministic (if odd) results rather than errors. Tools that load
//! configuration from disk should call [`BossConfig::validate`].

use crate::error::ConfigError;

/// Flat set of numeric knobs. All durations are seconds, all distances world units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BossConfig {
    // ===== phase transitions (with hysteresis) =====
    pub defensive_enter_health_ratio: f32,
    pub defensive_exit_health_ratio: f32,
    pub enrage_enter_health_ratio: f32,
    pub phase_min_hold_seconds: f32,

    // ===== spacing =====
    pub aggressive_cast_range: f32,
    pub aggressive_chase_range: f32,
    pub defensive_base_range: f32,
    pub defensive_low_health_bonus_range: f32,
    pub enraged_range: f32,
    pub min_spacing_range: f32,
    pub max_spacing_range: f32,
    pub max_reposition_step: f32,

    // ===== cooldowns =====
    pub projectile_cooldown_seconds: f32,
    pub aoe_cooldown_seconds: f32,
    pub heal_cooldown_seconds: f32,
    pub dash_cooldown_seconds: f32,
    pub teleport_cooldown_seconds: f32,
    pub enraged_burst_cooldown_seconds: f32,

    // ===== projectile / area effect =====
    pub projectile_speed: f32,
    pub projectile_max_lead_seconds: f32,
    pub projectile_optimal_range: f32,
    pub projectile_max_range: f32,
    pub aoe_cast_delay_seconds: f32,
    pub aoe_optimal_range: f32,
    pub aoe_max_range: f32,
    pub aoe_strafe_compensation: f32,
    pub player_max_speed_for_scoring: f32,

    // ===== heal =====
    pub heal_start_health_ratio: f32,
    pub heal_critical_health_ratio: f32,

    // ===== reactive dodge =====
    pub evade_reaction_window_seconds: f32,
    pub evade_safety_margin: f32,
    pub teleport_danger_threshold: f32,
    pub dash_distance: f32,
    pub teleport_distance: f32,
    pub evade_lateral_offset: f32,

    // ===== misc =====
    pub action_score_threshold: f32,
    pub enrage_burst_range: f32,
}

impl BossConfig {
    pub fn new() -> Self {
        Self {
            defensive_enter_health_ratio: 0.45,
            defensive_exit_health_ratio: 0.62,
            enrage_enter_health_ratio: 0.20,
            phase_min_hold_seconds: 1.5,

            aggressive_cast_range: 8.0,
            aggressive_chase_range: 5.0,
            defensive_base_range: 10.0,
            defensive_low_health_bonus_range: 3.0,
            enraged_range: 3.8,
            min_spacing_range: 2.5,
            max_spacing_range: 14.0,
            max_reposition_step: 2.0,

            projectile_cooldown_seconds: 2.6,
            aoe_cooldown_seconds: 7.5,
            heal_cooldown_seconds: 14.0,
            dash_cooldown_seconds: 5.0,
            teleport_cooldown_seconds: 10.0,
            enraged_burst_cooldown_seconds: 6.5,

            projectile_speed: 18.0,
            projectile_max_lead_seconds: 1.2,
            projectile_optimal_range: 8.0,
            projectile_max_range: 13.5,
            aoe_cast_delay_seconds: 0.75,
            aoe_optimal_range: 9.0,
            aoe_max_range: 13.0,
            aoe_strafe_compensation: 1.2,
            player_max_speed_for_scoring: 8.0,

            heal_start_health_ratio: 0.40,
            heal_critical_health_ratio: 0.18,

            evade_reaction_window_seconds: 0.45,
            evade_safety_margin: 0.30,
            teleport_danger_threshold: 0.75,
            dash_distance: 4.5,
            teleport_distance: 7.0,
            evade_lateral_offset: 1.4,

            action_score_threshold: 0.12,
            enrage_burst_range: 4.0,
        }
    }

    /// Checks the relationships the engine silently relies on.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defensive_exit_health_ratio < self.defensive_enter_health_ratio {
            return Err(ConfigError::InvertedThreshold {
                low: "defensive_enter_health_ratio",
                high: "defensive_exit_health_ratio",
            });
        }
        if self.heal_start_health_ratio < self.heal_critical_health_ratio {
            return Err(ConfigError::InvertedThreshold {
                low: "heal_critical_health_ratio",
                high: "heal_start_health_ratio",
            });
        }
        if self.max_spacing_range < self.min_spacing_range {
            return Err(ConfigError::InvertedRange {
                min: "min_spacing_range",
                max: "max_spacing_range",
            });
        }
        if self.projectile_max_range < self.projectile_optimal_range {
            return Err(ConfigError::InvertedRange {
                min: "projectile_optimal_range",
                max: "projectile_max_range",
            });
        }
        if self.aoe_max_range < self.aoe_optimal_range {
            return Err(ConfigError::InvertedRange {
                min: "aoe_optimal_range",
                max: "aoe_max_range",
            });
        }

        for (field, value) in [
            ("defensive_enter_health_ratio", self.defensive_enter_health_ratio),
            ("defensive_exit_health_ratio", self.defensive_exit_health_ratio),
            ("enrage_enter_health_ratio", self.enrage_enter_health_ratio),
            ("heal_start_health_ratio", self.heal_start_health_ratio),
            ("heal_critical_health_ratio", self.heal_critical_health_ratio),
            ("teleport_danger_threshold", self.teleport_danger_threshold),
            ("action_score_threshold", self.action_score_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange { field, value });
            }
        }

        for (field, value) in [
            ("phase_min_hold_seconds", self.phase_min_hold_seconds),
            ("projectile_cooldown_seconds", self.projectile_cooldown_seconds),
            ("aoe_cooldown_seconds", self.aoe_cooldown_seconds),
            ("heal_cooldown_seconds", self.heal_cooldown_seconds),
            ("dash_cooldown_seconds", self.dash_cooldown_seconds),
            ("teleport_cooldown_seconds", self.teleport_cooldown_seconds),
            ("enraged_burst_cooldown_seconds", self.enraged_burst_cooldown_seconds),
            ("projectile_max_lead_seconds", self.projectile_max_lead_seconds),
            ("aoe_cast_delay_seconds", self.aoe_cast_delay_seconds),
            ("max_reposition_step", self.max_reposition_step),
            ("evade_safety_margin", self.evade_safety_margin),
            ("dash_distance", self.dash_distance),
            ("teleport_distance", self.teleport_distance),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeValue { field, value });
            }
        }

        for (field, value) in [
            ("projectile_speed", self.projectile_speed),
            ("evade_reaction_window_seconds", self.evade_reaction_window_seconds),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        Ok(())
    }
}

impl Default for BossConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(BossConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_hysteresis_band_is_reported() {
        let config = BossConfig {
            defensive_exit_health_ratio: 0.30,
            ..BossConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedThreshold {
                low: "defensive_enter_health_ratio",
                high: "defensive_exit_health_ratio",
            })
        );
    }

    #[test]
    fn inverted_spacing_is_reported() {
        let config = BossConfig {
            min_spacing_range: 20.0,
            ..BossConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { min: "min_spacing_range", .. })
        ));
    }

    #[test]
    fn negative_cooldown_is_reported() {
        let config = BossConfig {
            heal_cooldown_seconds: -1.0,
            ..BossConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeValue {
                field: "heal_cooldown_seconds",
                value: -1.0,
            })
        );
    }

    #[test]
    fn nan_speed_is_reported() {
        let config = BossConfig {
            projectile_speed: f32::NAN,
            ..BossConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "projectile_speed", .. })
        ));
    }
}
