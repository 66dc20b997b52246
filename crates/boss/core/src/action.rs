//! Decision outputs: the selected action and the per-tick command.

use crate::geometry::Vec2;
use crate::phase::BossPhase;

/// Mutually exclusive action the boss performs this tick.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BossAction {
    /// No action cleared the score threshold.
    #[default]
    None,
    /// Walk toward the phase's preferred spacing.
    Reposition,
    /// Lead-aimed projectile.
    ProjectileSkillshot,
    /// Delayed area effect at the predicted player position.
    CastAoe,
    Heal,
    DashEvade,
    TeleportEvade,
    /// Close-range burst, only available while enraged.
    EnragedBurst,
}

impl BossAction {
    /// Returns true for the reactive evasion variants.
    pub const fn is_evade(self) -> bool {
        matches!(self, BossAction::DashEvade | BossAction::TeleportEvade)
    }
}

/// Command produced fresh by every `update`. The engine does not retain it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCommand {
    pub action: BossAction,
    pub phase: BossPhase,
    /// Winning utility in `[0, 1]`; zero for a no-op command.
    pub utility_score: f32,
    pub move_target: Vec2,
    pub aim_point: Vec2,
}

impl ActionCommand {
    /// No-op command that only reports the current phase.
    pub fn idle(phase: BossPhase) -> Self {
        Self {
            phase,
            ..Self::default()
        }
    }
}
