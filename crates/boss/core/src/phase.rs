//! Combat phase state machine with hysteresis and minimum hold time.
//!
//! ```text
//!              health <= defensive_enter
//!  Aggressive ─────────────────────────────▶ DefensiveHealing
//!      ▲      ◀───────────────────────────── │
//!      │       health >= defensive_exit      │
//!      │                                     │
//!      └──── health <= enrage_enter ──┬──────┘
//!                                     ▼
//!                                  Enraged   (absorbing)
//! ```
//!
//! Rules are evaluated once per tick, in priority order:
//!
//! 1. First time health is at or below `enrage_enter`: switch to Enraged,
//!    latch the enrage flag, restart the hold timer, stop.
//! 2. Once enraged, nothing changes again.
//! 3. While the hold timer is positive, nothing changes.
//! 4. Otherwise apply the Aggressive/DefensiveHealing hysteresis band and
//!    restart the hold timer on any realized transition.

use crate::config::BossConfig;

/// Coarse behavioral mode of the boss.
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
pub enum BossPhase {
    #[default]
    Aggressive,
    DefensiveHealing,
    /// Terminal: never exited within one engine lifetime.
    Enraged,
}

/// A realized phase change, reported for logging and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: BossPhase,
    pub to: BossPhase,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseMachine {
    phase: BossPhase,
    enrage_triggered: bool,
    hold_timer: f32,
}

impl PhaseMachine {
    pub const fn new() -> Self {
        Self {
            phase: BossPhase::Aggressive,
            enrage_triggered: false,
            hold_timer: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    #[inline]
    pub fn is_enraged(&self) -> bool {
        self.enrage_triggered
    }

    /// Seconds left before the hysteresis band may trigger another transition.
    #[inline]
    pub fn hold_remaining(&self) -> f32 {
        self.hold_timer
    }

    /// Advances the hold timer and applies the transition rules.
    ///
    /// `health_ratio` should already be clamped to `[0, 1]`.
    pub fn update(
        &mut self,
        dt_seconds: f32,
        health_ratio: f32,
        config: &BossConfig,
    ) -> Option<PhaseTransition> {
        self.hold_timer = (self.hold_timer - dt_seconds).max(0.0);

        if !self.enrage_triggered && health_ratio <= config.enrage_enter_health_ratio {
            self.enrage_triggered = true;
            return self.transition_to(BossPhase::Enraged, config);
        }

        if self.enrage_triggered || self.hold_timer > 0.0 {
            return None;
        }

        let target = match self.phase {
            BossPhase::Aggressive if health_ratio <= config.defensive_enter_health_ratio => {
                BossPhase::DefensiveHealing
            }
            BossPhase::DefensiveHealing if health_ratio >= config.defensive_exit_health_ratio => {
                BossPhase::Aggressive
            }
            current => current,
        };

        if target == self.phase {
            return None;
        }
        self.transition_to(target, config)
    }

    fn transition_to(&mut self, to: BossPhase, config: &BossConfig) -> Option<PhaseTransition> {
        let from = self.phase;
        self.phase = to;
        self.hold_timer = config.phase_min_hold_seconds;
        Some(PhaseTransition { from, to })
    }
}
