//! Scripted encounters for driving the engine outside a game.
//!
//! An [`EncounterScript`] fixes the opening snapshot and a list of
//! [`Keyframe`]s that overwrite boss health or the player's casting flag at
//! given frames. Movement and threat timing are advanced by the driver.

use boss_core::{AbilityThreat, BossState, PlayerState, Vec2};

/// Change applied at the start of `frame`, before the engine ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Keyframe {
    pub frame: u32,
    pub boss_health: Option<f32>,
    pub player_casting: Option<bool>,
}

impl Keyframe {
    pub fn apply(&self, boss: &mut BossState, player: &mut PlayerState) {
        if let Some(health) = self.boss_health {
            boss.health_ratio = health;
        }
        if let Some(casting) = self.player_casting {
            player.is_casting_high_impact = casting;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct EncounterScript {
    pub frames: u32,
    pub dt_seconds: f32,
    pub boss: BossState,
    pub player: PlayerState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub threats: Vec<AbilityThreat>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keyframes: Vec<Keyframe>,
}

impl EncounterScript {
    /// Built-in encounter: a strafing player, two incoming lanes, and two
    /// health drops that push the boss through DefensiveHealing into Enraged.
    pub fn demo() -> Self {
        Self {
            frames: 20,
            dt_seconds: 0.1,
            boss: BossState::new(Vec2::ZERO, 0.52),
            player: PlayerState {
                position: Vec2::new(7.0, 2.5),
                velocity: Vec2::new(2.2, 0.5),
                is_casting_high_impact: false,
            },
            threats: vec![
                AbilityThreat {
                    origin: Vec2::new(10.0, 2.0),
                    direction: Vec2::new(-1.0, 0.0),
                    speed: 15.0,
                    width: 0.7,
                    range: 14.0,
                    elapsed_seconds: 0.1,
                    danger: 0.9,
                },
                AbilityThreat {
                    origin: Vec2::new(2.0, -8.0),
                    direction: Vec2::new(0.0, 1.0),
                    speed: 8.0,
                    width: 1.0,
                    range: 10.0,
                    elapsed_seconds: 0.0,
                    danger: 0.4,
                },
            ],
            keyframes: vec![
                Keyframe {
                    frame: 8,
                    boss_health: Some(0.39),
                    player_casting: None,
                },
                Keyframe {
                    frame: 14,
                    boss_health: Some(0.17),
                    player_casting: Some(true),
                },
            ],
        }
    }

    /// Keyframes scheduled for `frame`, in script order.
    pub fn keyframes_at(&self, frame: u32) -> impl Iterator<Item = &Keyframe> {
        self.keyframes.iter().filter(move |key| key.frame == frame)
    }
}

impl Default for EncounterScript {
    fn default() -> Self {
        Self::demo()
    }
}
