//! Per-frame world snapshot supplied by the caller.

use crate::geometry::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Player is committed to a slow, high-impact cast and is unlikely to strafe.
    pub is_casting_high_impact: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BossState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Current health over maximum health, expected in `[0, 1]`.
    pub health_ratio: f32,
    pub collision_radius: f32,
}

impl BossState {
    pub const DEFAULT_COLLISION_RADIUS: f32 = 0.9;

    pub fn new(position: Vec2, health_ratio: f32) -> Self {
        Self {
            position,
            health_ratio,
            ..Self::default()
        }
    }
}

impl Default for BossState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            health_ratio: 1.0,
            collision_radius: Self::DEFAULT_COLLISION_RADIUS,
        }
    }
}
