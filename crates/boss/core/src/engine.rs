//! Per-tick decision pipeline.
//!
//! [`BossEngine`] owns all mutable decision state for one boss: phase,
//! cooldowns, the last observed player velocity and the candidate scratch
//! buffer. Each [`BossEngine::update`] runs the stages in a fixed order:
//!
//! 1. tick every cooldown
//! 2. update the phase state machine
//! 3. measure spacing, evaluate threats, solve aim points
//! 4. build and score the six candidates
//! 5. select the winner and emit an [`ActionCommand`]
//!
//! Execution is confirmed separately through [`BossEngine::on_action_committed`],
//! which is the only place cooldowns are started.
//!
//! The engine never allocates after construction and never fails. One
//! instance must not be ticked concurrently; distinct instances share nothing.

use crate::action::{ActionCommand, BossAction};
use crate::aim::{LeadSolution, predict_aoe_point, solve_intercept};
use crate::config::BossConfig;
use crate::cooldown::{Ability, Cooldowns};
use crate::geometry::{Vec2, clamp01, distance, safe_direction};
use crate::phase::{BossPhase, PhaseMachine};
use crate::scoring::{self, ScoringInput};
use crate::selector::{Candidate, CandidateSet};
use crate::state::{BossState, PlayerState};
use crate::threat::{AbilityThreat, EvadeMethod, ThreatAssessment, evaluate_threats};

/// Utility-based decision engine for a single boss.
#[derive(Clone, Debug)]
pub struct BossEngine {
    config: BossConfig,
    phase: PhaseMachine,
    cooldowns: Cooldowns,
    last_player_velocity: Vec2,
    candidates: CandidateSet,
    last_threat: ThreatAssessment,
}

impl BossEngine {
    pub fn new(config: BossConfig) -> Self {
        Self {
            config,
            phase: PhaseMachine::new(),
            cooldowns: Cooldowns::new(),
            last_player_velocity: Vec2::ZERO,
            candidates: CandidateSet::new(),
            last_threat: ThreatAssessment::default(),
        }
    }

    /// Current combat phase.
    #[inline]
    pub fn phase(&self) -> BossPhase {
        self.phase.phase()
    }

    #[inline]
    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    #[inline]
    pub fn cooldowns(&self) -> &Cooldowns {
        &self.cooldowns
    }

    /// Candidates scored on the last tick, in construction order.
    #[inline]
    pub fn candidates(&self) -> &[Candidate] {
        self.candidates.as_slice()
    }

    /// Threat assessment computed on the last tick.
    #[inline]
    pub fn last_threat(&self) -> &ThreatAssessment {
        &self.last_threat
    }

    /// Runs one decision tick.
    ///
    /// `dt_seconds` is the time since the previous tick. An empty `threats`
    /// slice means no hazards are active.
    pub fn update(
        &mut self,
        dt_seconds: f32,
        boss: &BossState,
        player: &PlayerState,
        threats: &[AbilityThreat],
    ) -> ActionCommand {
        self.cooldowns.tick_all(dt_seconds);
        let transition = self.phase.update(dt_seconds, clamp01(boss.health_ratio), &self.config);
        if let Some(transition) = transition {
            tracing::debug!(
                from = %transition.from,
                to = %transition.to,
                health = boss.health_ratio,
                enraged = self.phase.is_enraged(),
                hold = self.phase.hold_remaining(),
                "boss phase transition"
            );
        }
        let phase = self.phase.phase();

        let target_distance = distance(boss.position, player.position);
        let desired_range =
            scoring::desired_spacing(phase, boss.health_ratio, &self.cooldowns, &self.config);
        let threat = evaluate_threats(threats, boss, player, &self.cooldowns, &self.config);
        let lead = solve_intercept(
            boss.position,
            self.config.projectile_speed,
            player.position,
            player.velocity,
            self.config.projectile_max_lead_seconds,
        );
        let aoe_point = predict_aoe_point(
            boss,
            player,
            self.last_player_velocity,
            self.config.aoe_cast_delay_seconds,
            self.config.aoe_strafe_compensation,
        );

        if let Some(method) = threat.method {
            tracing::debug!(
                %method,
                danger = threat.danger_score,
                threat = ?threat.threat_index,
                "evasion triggered"
            );
        }

        let input = ScoringInput {
            boss,
            player,
            phase,
            cooldowns: &self.cooldowns,
            config: &self.config,
            target_distance,
        };
        fill_candidates(
            &mut self.candidates,
            &input,
            &threat,
            &lead,
            aoe_point,
            desired_range,
        );
        let best = self.candidates.winner();

        self.last_player_velocity = player.velocity;
        self.last_threat = threat;

        if best.action == BossAction::None || best.score < self.config.action_score_threshold {
            tracing::trace!(%phase, score = best.score, "no action above threshold");
            return ActionCommand::idle(phase);
        }

        tracing::trace!(%phase, action = %best.action, score = best.score, "action selected");
        ActionCommand {
            action: best.action,
            phase,
            utility_score: best.score,
            move_target: best.move_target,
            aim_point: best.aim_point,
        }
    }

    /// Confirms that `action` was executed and starts its cooldown.
    ///
    /// Call at most once per tick, only for the action returned by the
    /// preceding [`BossEngine::update`]. Reposition and None have no cooldown.
    pub fn on_action_committed(&mut self, action: BossAction) {
        let Some(ability) = Ability::for_action(action) else {
            return;
        };
        let duration = match ability {
            Ability::Projectile => self.config.projectile_cooldown_seconds,
            Ability::Aoe => self.config.aoe_cooldown_seconds,
            Ability::Heal => self.config.heal_cooldown_seconds,
            Ability::Dash => self.config.dash_cooldown_seconds,
            Ability::Teleport => self.config.teleport_cooldown_seconds,
            Ability::EnragedBurst => self.config.enraged_burst_cooldown_seconds,
        };
        self.cooldowns.start(ability, duration);
        tracing::trace!(%ability, duration, "cooldown started");
    }
}

impl Default for BossEngine {
    fn default() -> Self {
        Self::new(BossConfig::default())
    }
}

/// Overwrites `set` with this tick's six candidates in tie-break order.
fn fill_candidates(
    set: &mut CandidateSet,
    input: &ScoringInput<'_>,
    threat: &ThreatAssessment,
    lead: &LeadSolution,
    aoe_point: Vec2,
    desired_range: f32,
) {
    set.clear();

    let evade = match threat.method {
        Some(method) => Candidate {
            action: match method {
                EvadeMethod::Teleport => BossAction::TeleportEvade,
                EvadeMethod::Dash => BossAction::DashEvade,
            },
            score: scoring::score_evade(threat),
            move_target: threat.evade_target,
            ..Candidate::INERT
        },
        None => Candidate::INERT,
    };
    set.push(evade);

    let boss = input.boss;
    let to_player = safe_direction(input.player.position - boss.position, Vec2::X);
    let move_dir = if input.target_distance < desired_range {
        -to_player
    } else {
        to_player
    };
    let step = input
        .config
        .max_reposition_step
        .min((input.target_distance - desired_range).abs());
    set.push(Candidate {
        action: BossAction::Reposition,
        score: scoring::score_reposition(input.target_distance, desired_range, input.phase),
        move_target: boss.position + move_dir * step,
        ..Candidate::INERT
    });

    set.push(Candidate {
        action: BossAction::ProjectileSkillshot,
        score: scoring::score_projectile(input, lead),
        aim_point: lead.aim_point,
        ..Candidate::INERT
    });

    set.push(Candidate {
        action: BossAction::CastAoe,
        score: scoring::score_aoe(input),
        aim_point: aoe_point,
        ..Candidate::INERT
    });

    set.push(Candidate {
        action: BossAction::Heal,
        score: scoring::score_heal(input),
        ..Candidate::INERT
    });

    set.push(Candidate {
        action: BossAction::EnragedBurst,
        score: scoring::score_enraged_burst(input),
        aim_point: input.player.position,
        ..Candidate::INERT
    });
}
