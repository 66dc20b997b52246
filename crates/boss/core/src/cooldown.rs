//! Reuse gates for the boss's abilities.
//!
//! Every cooldown-gated ability owns one [`Cooldown`]. The engine ticks all of
//! them unconditionally at the start of every update, before anything reads
//! readiness.

use crate::action::BossAction;

/// Countdown timer. Remaining time is never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldown {
    remaining_seconds: f32,
}

impl Cooldown {
    pub const fn new() -> Self {
        Self {
            remaining_seconds: 0.0,
        }
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.remaining_seconds <= 0.0
    }

    /// Restarts the timer. Negative durations start an already-expired timer.
    #[inline]
    pub fn start(&mut self, duration_seconds: f32) {
        self.remaining_seconds = duration_seconds.max(0.0);
    }

    #[inline]
    pub fn tick(&mut self, dt_seconds: f32) {
        self.remaining_seconds = (self.remaining_seconds - dt_seconds).max(0.0);
    }

    #[inline]
    pub fn remaining_seconds(&self) -> f32 {
        self.remaining_seconds
    }
}

/// Abilities with their own reuse gate.
///
/// Reposition is free movement and has no cooldown.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Ability {
    Projectile,
    Aoe,
    Heal,
    Dash,
    Teleport,
    EnragedBurst,
}

impl Ability {
    pub const COUNT: usize = 6;

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Ability whose cooldown starts when `action` is committed, if any.
    pub const fn for_action(action: BossAction) -> Option<Ability> {
        match action {
            BossAction::ProjectileSkillshot => Some(Ability::Projectile),
            BossAction::CastAoe => Some(Ability::Aoe),
            BossAction::Heal => Some(Ability::Heal),
            BossAction::DashEvade => Some(Ability::Dash),
            BossAction::TeleportEvade => Some(Ability::Teleport),
            BossAction::EnragedBurst => Some(Ability::EnragedBurst),
            BossAction::None | BossAction::Reposition => None,
        }
    }
}

/// One [`Cooldown`] per [`Ability`], stored inline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldowns {
    slots: [Cooldown; Ability::COUNT],
}

impl Cooldowns {
    pub const fn new() -> Self {
        Self {
            slots: [Cooldown::new(); Ability::COUNT],
        }
    }

    pub fn tick_all(&mut self, dt_seconds: f32) {
        for slot in &mut self.slots {
            slot.tick(dt_seconds);
        }
    }

    #[inline]
    pub fn get(&self, ability: Ability) -> &Cooldown {
        &self.slots[ability.index()]
    }

    #[inline]
    pub fn ready(&self, ability: Ability) -> bool {
        self.get(ability).ready()
    }

    #[inline]
    pub fn start(&mut self, ability: Ability, duration_seconds: f32) {
        self.slots[ability.index()].start(duration_seconds);
    }
}
