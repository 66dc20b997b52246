//! Utility scoring functions for the boss's candidate actions.
//!
//! Every function maps the current situation to a desirability in `[0, 1]`.
//! Zero means "not available this tick" (cooldown running, out of range,
//! wrong phase, health outside the window). Non-zero scores combine:
//!
//! - a **base** constant,
//! - weighted **fit** terms of the form `1 − clamp01(|actual − optimal| / optimal)`,
//!   which decay linearly with range or health error,
//! - phase- or state-dependent **bonuses and penalties**.
//!
//! The functions are pure and independent of the engine's mutable state;
//! they only see what [`ScoringInput`] carries.

use crate::aim::LeadSolution;
use crate::config::BossConfig;
use crate::cooldown::{Ability, Cooldowns};
use crate::geometry::{clamp01, length};
use crate::phase::BossPhase;
use crate::state::{BossState, PlayerState};
use crate::threat::ThreatAssessment;

/// Lowest evade utility; always above every other candidate's ceiling in practice.
pub const EVADE_BASE_SCORE: f32 = 0.92;
const EVADE_DANGER_WEIGHT: f32 = 0.08;

/// Read-only view of everything the scorers consume.
#[derive(Clone, Copy, Debug)]
pub struct ScoringInput<'a> {
    pub boss: &'a BossState,
    pub player: &'a PlayerState,
    pub phase: BossPhase,
    pub cooldowns: &'a Cooldowns,
    pub config: &'a BossConfig,
    /// Boss-to-player distance.
    pub target_distance: f32,
}

impl ScoringInput<'_> {
    fn ready(&self, ability: Ability) -> bool {
        self.cooldowns.ready(ability)
    }

    /// Player speed as a fraction of the configured scoring maximum.
    fn player_mobility(&self) -> f32 {
        clamp01(length(self.player.velocity) / self.config.player_max_speed_for_scoring.max(1.0))
    }
}

/// `1 − clamp01(|actual − optimal| / max(1, optimal))`.
#[inline]
fn range_fit(actual: f32, optimal: f32) -> f32 {
    1.0 - clamp01((actual - optimal).abs() / optimal.max(1.0))
}

/// Preferred boss-to-player distance for the current phase.
///
/// Aggressive bosses hold cast range while a ranged ability is ready and
/// close to chase range otherwise. Defensive spacing widens as health
/// drops. The result is bounded to the configured spacing range without
/// panicking on an inverted range.
pub fn desired_spacing(
    phase: BossPhase,
    health_ratio: f32,
    cooldowns: &Cooldowns,
    config: &BossConfig,
) -> f32 {
    let desired = match phase {
        BossPhase::Aggressive => {
            if cooldowns.ready(Ability::Projectile) || cooldowns.ready(Ability::Aoe) {
                config.aggressive_cast_range
            } else {
                config.aggressive_chase_range
            }
        }
        BossPhase::DefensiveHealing => {
            let low_health_pressure = 1.0 - clamp01(health_ratio);
            config.defensive_base_range
                + low_health_pressure * config.defensive_low_health_bonus_range
        }
        BossPhase::Enraged => config.enraged_range,
    };

    desired
        .max(config.min_spacing_range)
        .min(config.max_spacing_range)
}

pub fn score_reposition(current_distance: f32, desired_distance: f32, phase: BossPhase) -> f32 {
    let spacing_error = (current_distance - desired_distance).abs();
    let normalized = clamp01(spacing_error / desired_distance.max(1.0));
    let phase_scale = match phase {
        BossPhase::Aggressive => 0.72,
        BossPhase::DefensiveHealing => 0.90,
        BossPhase::Enraged => 0.58,
    };
    normalized * phase_scale
}

/// Lead-aimed projectile. Needs a valid intercept and the target in range.
pub fn score_projectile(input: &ScoringInput<'_>, lead: &LeadSolution) -> f32 {
    let config = input.config;
    if !input.ready(Ability::Projectile)
        || !lead.valid
        || input.target_distance > config.projectile_max_range
    {
        return 0.0;
    }

    let range_score = range_fit(input.target_distance, config.projectile_optimal_range);
    let cast_commit_bonus = if input.player.is_casting_high_impact {
        0.14
    } else {
        0.0
    };
    let enrage_penalty = if input.phase == BossPhase::Enraged {
        0.08
    } else {
        0.0
    };

    clamp01(
        0.30 + 0.43 * range_score + 0.27 * input.player_mobility() + cast_commit_bonus
            - enrage_penalty,
    )
}

/// Delayed area effect. Moving or cast-committed players are good targets.
pub fn score_aoe(input: &ScoringInput<'_>) -> f32 {
    let config = input.config;
    if !input.ready(Ability::Aoe) || input.target_distance > config.aoe_max_range {
        return 0.0;
    }

    let range_score = range_fit(input.target_distance, config.aoe_optimal_range);
    let move_commit_score = if input.player.is_casting_high_impact {
        1.0
    } else {
        input.player_mobility()
    };
    let defensive_penalty = if input.phase == BossPhase::DefensiveHealing {
        0.10
    } else {
        0.0
    };

    clamp01(0.24 + 0.41 * range_score + 0.35 * move_commit_score - defensive_penalty)
}

/// Self-heal. Never available while enraged or above the heal start ratio.
pub fn score_heal(input: &ScoringInput<'_>) -> f32 {
    let config = input.config;
    if !input.ready(Ability::Heal)
        || input.phase == BossPhase::Enraged
        || input.boss.health_ratio > config.heal_start_health_ratio
    {
        return 0.0;
    }

    let window = (config.heal_start_health_ratio - config.heal_critical_health_ratio).max(0.05);
    let health_need = clamp01((config.heal_start_health_ratio - input.boss.health_ratio) / window);
    let spacing_safety = clamp01(input.target_distance / config.defensive_base_range.max(1.0));
    let defensive_bonus = if input.phase == BossPhase::DefensiveHealing {
        0.12
    } else {
        0.0
    };

    clamp01(0.34 + 0.48 * health_need + 0.18 * spacing_safety + defensive_bonus)
}

/// Reactive dash/teleport. Dominates every other candidate when present.
pub fn score_evade(threat: &ThreatAssessment) -> f32 {
    if !threat.should_evade() {
        return 0.0;
    }
    EVADE_BASE_SCORE + EVADE_DANGER_WEIGHT * clamp01(threat.danger_score)
}

/// Close-range burst, gated to the Enraged phase.
pub fn score_enraged_burst(input: &ScoringInput<'_>) -> f32 {
    let config = input.config;
    if input.phase != BossPhase::Enraged || !input.ready(Ability::EnragedBurst) {
        return 0.0;
    }

    let close_score = 1.0 - clamp01(input.target_distance / config.enrage_burst_range.max(1.0));
    let low_health_pressure =
        1.0 - clamp01(input.boss.health_ratio / config.enrage_enter_health_ratio.max(0.01));

    clamp01(0.40 + 0.40 * close_score + 0.20 * low_health_pressure)
}
