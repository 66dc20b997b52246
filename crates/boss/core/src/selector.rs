//! Winner-take-all candidate selection.
//!
//! Candidates are scanned in construction order and the strictly greatest
//! score wins, so on exact ties the earlier candidate keeps the slot. The
//! construction order is therefore part of the contract:
//!
//! ```text
//! evade, reposition, projectile, area effect, heal, enraged burst
//! ```

use arrayvec::ArrayVec;

use crate::action::BossAction;
use crate::geometry::Vec2;

/// Number of candidates built every tick.
pub const CANDIDATE_COUNT: usize = 6;

/// One scored option for this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub action: BossAction,
    pub score: f32,
    pub move_target: Vec2,
    pub aim_point: Vec2,
}

impl Candidate {
    /// Placeholder that can never win selection.
    pub const INERT: Self = Self {
        action: BossAction::None,
        score: 0.0,
        move_target: Vec2::ZERO,
        aim_point: Vec2::ZERO,
    };
}

/// Fixed-capacity scratch buffer reused across ticks.
///
/// Backed by inline storage; pushing never allocates.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    slots: ArrayVec<Candidate, CANDIDATE_COUNT>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Drops last tick's candidates, keeping the storage.
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Appends a candidate. Candidates beyond the fixed capacity are dropped.
    pub fn push(&mut self, candidate: Candidate) {
        if self.slots.try_push(candidate).is_err() {
            tracing::warn!(action = %candidate.action, "candidate buffer full, dropping");
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Candidate] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Best candidate by strictly greater score; see [`select_winner`].
    pub fn winner(&self) -> Candidate {
        select_winner(&self.slots)
    }
}

/// Returns the first candidate with the strictly greatest score.
///
/// Starts from [`Candidate::INERT`], so an all-zero set (or an empty one)
/// yields the inert candidate.
pub fn select_winner(candidates: &[Candidate]) -> Candidate {
    let mut best = Candidate::INERT;
    for candidate in candidates {
        if candidate.score > best.score {
            best = *candidate;
        }
    }
    best
}
