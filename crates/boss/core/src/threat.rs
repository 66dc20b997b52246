//! Reactive threat evaluation.
//!
//! A threat is a line-shaped hazard advancing from `origin` along `direction`.
//! Each tick the evaluator looks at the part of every lane that has not been
//! swept yet, keeps the threats the boss can both be hit by and still react
//! to, and picks the single most dangerous one. For that threat it decides
//! between a dash and a teleport and computes where to go.

use crate::config::BossConfig;
use crate::cooldown::{Ability, Cooldowns};
use crate::geometry::{
    EPSILON, Vec2, clamp01, distance_to_segment, dot, perpendicular, safe_direction,
};
use crate::state::{BossState, PlayerState};

/// Weight of the time-to-impact urgency in the danger score.
const TIME_URGENCY_WEIGHT: f32 = 0.55;
/// Weight of the lane-proximity urgency in the danger score.
const LANE_URGENCY_WEIGHT: f32 = 0.45;

/// Incoming line-shaped hazard authored by gameplay scripts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityThreat {
    pub origin: Vec2,
    /// Expected to be a unit vector; degenerate directions fall back to +x.
    pub direction: Vec2,
    /// Advance speed. Zero means the effect is already fully extended.
    pub speed: f32,
    /// Half-thickness of the hit lane.
    pub width: f32,
    pub range: f32,
    /// Time since the threat spawned.
    pub elapsed_seconds: f32,
    /// Authored danger hint in `[0, 1]`.
    pub danger: f32,
}

impl Default for AbilityThreat {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            direction: Vec2::ZERO,
            speed: 0.0,
            width: 0.75,
            range: 10.0,
            elapsed_seconds: 0.0,
            danger: 1.0,
        }
    }
}

/// How the boss gets out of the way.
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
pub enum EvadeMethod {
    Dash,
    Teleport,
}

/// Evasion directive for the most dangerous reachable threat, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThreatAssessment {
    /// `Some` when the boss should evade this tick.
    pub method: Option<EvadeMethod>,
    /// Danger of the winning threat in `[0, 1]`; zero when nothing qualifies.
    pub danger_score: f32,
    pub evade_target: Vec2,
    /// Index of the winning threat in the input slice.
    pub threat_index: Option<usize>,
}

impl ThreatAssessment {
    #[inline]
    pub fn should_evade(&self) -> bool {
        self.method.is_some()
    }
}

/// Lane geometry and urgency of one threat relative to the boss.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LaneHit {
    direction: Vec2,
    danger: f32,
}

fn assess_lane(threat: &AbilityThreat, boss: &BossState, config: &BossConfig) -> Option<LaneHit> {
    if threat.range <= 0.0 {
        return None;
    }

    let direction = safe_direction(threat.direction, Vec2::X);
    let traveled = (threat.elapsed_seconds * threat.speed.max(0.0)).clamp(0.0, threat.range);
    let leading_edge = threat.origin + direction * traveled;
    let lane_end = threat.origin + direction * threat.range;

    let lane = distance_to_segment(boss.position, leading_edge, lane_end);
    let hit_radius = threat.width + boss.collision_radius + config.evade_safety_margin;
    if lane.distance > hit_radius {
        return None;
    }

    let remaining = (threat.range - traveled).max(0.0);
    let time_to_impact = if threat.speed > EPSILON {
        lane.t * remaining / threat.speed
    } else {
        0.0
    };
    if time_to_impact > config.evade_reaction_window_seconds {
        return None;
    }

    let time_urgency =
        1.0 - clamp01(time_to_impact / config.evade_reaction_window_seconds.max(EPSILON));
    let lane_urgency = 1.0 - clamp01(lane.distance / hit_radius.max(EPSILON));
    let danger = clamp01(threat.danger)
        * (TIME_URGENCY_WEIGHT * time_urgency + LANE_URGENCY_WEIGHT * lane_urgency);

    Some(LaneHit { direction, danger })
}

/// Picks the most dangerous threat and plans an evasion for it.
///
/// Ties keep the earliest threat in `threats`. A threat with zero danger
/// never triggers evasion.
pub fn evaluate_threats(
    threats: &[AbilityThreat],
    boss: &BossState,
    player: &PlayerState,
    cooldowns: &Cooldowns,
    config: &BossConfig,
) -> ThreatAssessment {
    let mut best = ThreatAssessment::default();

    for (index, threat) in threats.iter().enumerate() {
        let Some(hit) = assess_lane(threat, boss, config) else {
            continue;
        };
        if hit.danger <= best.danger_score {
            continue;
        }

        let lane_normal = perpendicular(hit.direction);
        let away_from_player = safe_direction(boss.position - player.position, lane_normal);
        let lateral = if dot(lane_normal, away_from_player) < 0.0 {
            -lane_normal
        } else {
            lane_normal
        };

        let method = choose_method(hit.danger, cooldowns, config);
        let step = match method {
            EvadeMethod::Teleport => config.teleport_distance,
            EvadeMethod::Dash => config.dash_distance,
        };

        best = ThreatAssessment {
            method: Some(method),
            danger_score: hit.danger,
            evade_target: boss.position
                + away_from_player * step
                + lateral * config.evade_lateral_offset,
            threat_index: Some(index),
        };
    }

    best
}

/// Teleport is reserved for high danger, or for when dash is unavailable.
fn choose_method(danger: f32, cooldowns: &Cooldowns, config: &BossConfig) -> EvadeMethod {
    let teleport_ready = cooldowns.ready(Ability::Teleport);
    let dash_ready = cooldowns.ready(Ability::Dash);
    if teleport_ready && (danger >= config.teleport_danger_threshold || !dash_ready) {
        EvadeMethod::Teleport
    } else {
        EvadeMethod::Dash
    }
}
