//! Predictive aiming: closed-form projectile intercept and a heuristic
//! predictor for delayed area effects.

use crate::geometry::{EPSILON, Vec2, dot, perpendicular, safe_direction};
use crate::state::{BossState, PlayerState};

/// Weight of the current-frame velocity sample in the smoothed estimate.
const VELOCITY_SMOOTHING: f32 = 0.75;
/// Fraction of the prediction pulled back toward a casting player's position.
const CAST_COMMIT_PULLBACK: f32 = 0.45;

/// Result of [`solve_intercept`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LeadSolution {
    pub valid: bool,
    /// Flight time to the intercept, in `[0, max_lead_seconds]`.
    pub intercept_time: f32,
    pub aim_point: Vec2,
    /// No positive intercept root existed; `intercept_time` is the lead cap.
    pub capped: bool,
}

impl LeadSolution {
    const INVALID: Self = Self {
        valid: false,
        intercept_time: 0.0,
        aim_point: Vec2::ZERO,
        capped: false,
    };
}

/// Solves `|rel + v·t| = s·t` for the earliest positive `t`.
///
/// With `a = |v|² − s²`, `b = 2·rel·v`, `c = |rel|²` this is `a·t² + b·t + c = 0`.
/// When `a ≈ 0` (target as fast as the projectile) the linear equation
/// `b·t + c = 0` is used instead; if `b ≈ 0` as well there is no solution.
/// A negative discriminant or non-positive roots fall back to the lead cap.
pub fn solve_intercept(
    shooter: Vec2,
    projectile_speed: f32,
    target: Vec2,
    target_velocity: Vec2,
    max_lead_seconds: f32,
) -> LeadSolution {
    if projectile_speed <= EPSILON {
        return LeadSolution::INVALID;
    }

    let rel = target - shooter;
    let a = dot(target_velocity, target_velocity) - projectile_speed * projectile_speed;
    let b = 2.0 * dot(rel, target_velocity);
    let c = dot(rel, rel);

    let root = if a.abs() <= EPSILON {
        if b.abs() <= EPSILON {
            return LeadSolution::INVALID;
        }
        Some(-c / b).filter(|t| *t > 0.0)
    } else {
        smallest_positive_root(a, b, c)
    };

    let (time, capped) = match root {
        Some(t) if t.is_finite() => (t, false),
        Some(_) => return LeadSolution::INVALID,
        None => (max_lead_seconds, true),
    };
    let time = time.max(0.0).min(max_lead_seconds.max(0.0));

    LeadSolution {
        valid: true,
        intercept_time: time,
        aim_point: target + target_velocity * time,
        capped,
    }
}

fn smallest_positive_root(a: f32, b: f32, c: f32) -> Option<f32> {
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let inv_two_a = 0.5 / a;
    let t0 = (-b - sqrt_disc) * inv_two_a;
    let t1 = (-b + sqrt_disc) * inv_two_a;

    [t0, t1]
        .into_iter()
        .filter(|t| *t > EPSILON)
        .reduce(f32::min)
}

/// Blends the current velocity sample with the previous one.
#[inline]
pub fn smooth_velocity(current: Vec2, previous: Vec2) -> Vec2 {
    current * VELOCITY_SMOOTHING + previous * (1.0 - VELOCITY_SMOOTHING)
}

/// Predicts where the player will stand when a delayed area effect lands.
///
/// The smoothed velocity is extrapolated over the cast delay, then pushed
/// sideways (perpendicular to the boss→player line, on the side the player
/// is drifting toward) to catch strafing. A player committed to a
/// high-impact cast is pulled back toward their current position.
pub fn predict_aoe_point(
    boss: &BossState,
    player: &PlayerState,
    previous_velocity: Vec2,
    cast_delay_seconds: f32,
    strafe_compensation: f32,
) -> Vec2 {
    let velocity = smooth_velocity(player.velocity, previous_velocity);
    let to_player = safe_direction(player.position - boss.position, Vec2::X);
    let mut tangent = perpendicular(to_player);
    if dot(tangent, velocity) < 0.0 {
        tangent = -tangent;
    }

    let mut predicted = player.position + velocity * cast_delay_seconds;
    predicted += tangent * strafe_compensation;
    if player.is_casting_high_impact {
        predicted =
            predicted * (1.0 - CAST_COMMIT_PULLBACK) + player.position * CAST_COMMIT_PULLBACK;
    }
    predicted
}
