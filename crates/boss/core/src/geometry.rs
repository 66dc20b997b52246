//! 2D vector math shared by every stage of the decision pipeline.
//!
//! Everything here is stateless. Degenerate inputs (zero-length vectors,
//! zero-length segments) resolve to documented fallback values instead of
//! producing NaN, so callers never need to special-case them.

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Magnitude below which a vector or segment is treated as degenerate.
pub const EPSILON: f32 = 1.0e-5;

/// Two-component world-space vector (positions, velocities, directions).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[inline]
pub fn dot(lhs: Vec2, rhs: Vec2) -> f32 {
    lhs.x * rhs.x + lhs.y * rhs.y
}

#[inline]
pub fn length_sq(value: Vec2) -> f32 {
    dot(value, value)
}

#[inline]
pub fn length(value: Vec2) -> f32 {
    length_sq(value).sqrt()
}

#[inline]
pub fn distance(lhs: Vec2, rhs: Vec2) -> f32 {
    length(lhs - rhs)
}

/// Unit vector in the direction of `value`, or [`Vec2::ZERO`] when the
/// magnitude is at or below [`EPSILON`].
pub fn normalize(value: Vec2) -> Vec2 {
    let len = length(value);
    if len <= EPSILON {
        return Vec2::ZERO;
    }
    value * (1.0 / len)
}

/// Left-hand rotation by 90 degrees: `(-y, x)`.
#[inline]
pub const fn perpendicular(value: Vec2) -> Vec2 {
    Vec2::new(-value.y, value.x)
}

#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Normalized `value`, or `fallback` (returned as-is) when `value` is degenerate.
pub fn safe_direction(value: Vec2, fallback: Vec2) -> Vec2 {
    if length_sq(value) <= EPSILON {
        return fallback;
    }
    normalize(value)
}

/// Closest-point query result for [`distance_to_segment`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SegmentProjection {
    /// Distance from the query point to the closest point on the segment.
    pub distance: f32,
    /// Position of the closest point along the segment, in `[0, 1]`.
    pub t: f32,
}

/// Distance from `point` to the segment `a`→`b`.
///
/// Segments whose squared length is at or below [`EPSILON`] collapse to the
/// point `a` with `t = 0`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> SegmentProjection {
    let ab = b - a;
    let ab_len_sq = length_sq(ab);
    if ab_len_sq <= EPSILON {
        return SegmentProjection {
            distance: distance(point, a),
            t: 0.0,
        };
    }

    let t = (dot(point - a, ab) / ab_len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    SegmentProjection {
        distance: distance(point, closest),
        t,
    }
}
