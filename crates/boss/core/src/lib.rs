//! Per-frame utility decision engine for boss combat.
//!
//! `boss-core` turns a world snapshot (boss, player, incoming threats) into
//! exactly one [`ActionCommand`] per tick. Scoring is pure and deterministic;
//! all mutable decision state lives in [`engine::BossEngine`], and cooldowns
//! only start when the caller confirms execution through
//! [`BossEngine::on_action_committed`].
//!
//! The engine never allocates after construction and never fails at runtime.
//! Loading and validating configuration from disk lives in `boss-content`.
pub mod action;
pub mod aim;
pub mod config;
pub mod cooldown;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod phase;
pub mod scoring;
pub mod selector;
pub mod state;
pub mod threat;

pub use action::{ActionCommand, BossAction};
pub use aim::{LeadSolution, predict_aoe_point, smooth_velocity, solve_intercept};
pub use config::BossConfig;
pub use cooldown::{Ability, Cooldown, Cooldowns};
pub use engine::BossEngine;
pub use error::ConfigError;
pub use geometry::{EPSILON, SegmentProjection, Vec2};
pub use phase::{BossPhase, PhaseMachine, PhaseTransition};
pub use scoring::{EVADE_BASE_SCORE, ScoringInput};
pub use selector::{CANDIDATE_COUNT, Candidate, CandidateSet, select_winner};
pub use state::{BossState, PlayerState};
pub use threat::{AbilityThreat, EvadeMethod, ThreatAssessment, evaluate_threats};
