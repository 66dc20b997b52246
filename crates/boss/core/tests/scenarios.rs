use boss_core::{
    AbilityThreat, BossAction, BossConfig, BossEngine, BossPhase, BossState, PlayerState, Vec2,
    geometry::distance, scoring::score_evade, solve_intercept,
};
use proptest::prelude::*;

const DT: f32 = 0.1;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1.0e-3
}

fn standing_player(x: f32, y: f32) -> PlayerState {
    PlayerState {
        position: Vec2::new(x, y),
        ..PlayerState::default()
    }
}

fn lane_threat(elapsed: f32, danger: f32) -> AbilityThreat {
    AbilityThreat {
        origin: Vec2::new(10.0, 0.0),
        direction: Vec2::new(-1.0, 0.0),
        speed: 15.0,
        width: 0.7,
        range: 14.0,
        elapsed_seconds: elapsed,
        danger,
    }
}

/// Boss loses health while the player stands still at distance 6.
///
/// 1. Full health: Aggressive, no heal candidate
/// 2. Health hits the defensive threshold: DefensiveHealing
/// 3. Health below the heal start ratio: Heal outscores every ranged option
#[test]
fn declining_health_turns_defensive_then_heals() {
    let mut engine = BossEngine::default();
    let player = standing_player(6.0, 0.0);

    // ================================================================
    // PHASE 1: Full health
    // ================================================================
    let command = engine.update(DT, &BossState::new(Vec2::ZERO, 1.0), &player, &[]);
    assert_eq!(command.phase, BossPhase::Aggressive);
    assert_ne!(command.action, BossAction::Heal);

    let command = engine.update(DT, &BossState::new(Vec2::ZERO, 0.7), &player, &[]);
    assert_eq!(command.phase, BossPhase::Aggressive);

    // ================================================================
    // PHASE 2: Defensive threshold
    // ================================================================
    let command = engine.update(DT, &BossState::new(Vec2::ZERO, 0.45), &player, &[]);
    assert_eq!(command.phase, BossPhase::DefensiveHealing);
    assert_ne!(command.action, BossAction::Heal);

    // ================================================================
    // PHASE 3: Heal window
    // ================================================================
    let command = engine.update(DT, &BossState::new(Vec2::ZERO, 0.30), &player, &[]);
    assert_eq!(command.phase, BossPhase::DefensiveHealing);
    assert_eq!(command.action, BossAction::Heal);
    assert!(approx(command.utility_score, 0.786));

    let projectile = engine.candidates()[2];
    assert_eq!(projectile.action, BossAction::ProjectileSkillshot);
    assert!(approx(projectile.score, 0.6225));

    engine.on_action_committed(command.action);
    let command = engine.update(DT, &BossState::new(Vec2::ZERO, 0.30), &player, &[]);
    assert_ne!(command.action, BossAction::Heal);
}

/// Healing back above the exit ratio is ignored until the hold time elapses.
#[test]
fn defensive_phase_holds_before_recovering() {
    let mut engine = BossEngine::default();
    let player = standing_player(6.0, 0.0);

    engine.update(DT, &BossState::new(Vec2::ZERO, 0.40), &player, &[]);
    assert_eq!(engine.phase(), BossPhase::DefensiveHealing);

    engine.update(DT, &BossState::new(Vec2::ZERO, 0.90), &player, &[]);
    assert_eq!(engine.phase(), BossPhase::DefensiveHealing);

    for _ in 0..20 {
        engine.update(DT, &BossState::new(Vec2::ZERO, 0.90), &player, &[]);
    }
    assert_eq!(engine.phase(), BossPhase::Aggressive);
}

/// Enrage latches on the first crossing and survives a full heal.
#[test]
fn enrage_is_sticky() {
    let mut engine = BossEngine::default();
    let player = standing_player(3.0, 0.0);

    let command = engine.update(DT, &BossState::new(Vec2::ZERO, 0.20), &player, &[]);
    assert_eq!(command.phase, BossPhase::Enraged);

    for _ in 0..50 {
        let command = engine.update(DT, &BossState::new(Vec2::ZERO, 1.0), &player, &[]);
        assert_eq!(command.phase, BossPhase::Enraged);
        assert_ne!(command.action, BossAction::Heal);
    }
}

/// An imminent, dangerous threat beats every other candidate.
#[test]
fn imminent_threat_forces_teleport_then_dash() {
    let mut engine = BossEngine::default();
    let boss = BossState::default();
    let player = standing_player(6.0, 0.0);
    let threats = [lane_threat(0.55, 1.0)];

    let command = engine.update(DT, &boss, &player, &threats);
    assert_eq!(command.action, BossAction::TeleportEvade);
    assert!(command.utility_score >= 0.92);
    assert!(approx(command.move_target.x, -7.0));
    assert!(approx(command.move_target.y, -1.4));
    assert_eq!(engine.last_threat().threat_index, Some(0));

    engine.on_action_committed(command.action);
    let command = engine.update(DT, &boss, &player, &threats);
    assert_eq!(command.action, BossAction::DashEvade);
    assert!(approx(command.move_target.x, -4.5));
}

/// The far threat is ~0.57s from impact: outside the default reaction window.
#[test]
fn early_threat_is_ignored_with_default_window() {
    let mut engine = BossEngine::default();
    let command = engine.update(
        DT,
        &BossState::default(),
        &standing_player(6.0, 0.0),
        &[lane_threat(0.1, 0.9)],
    );
    assert!(!engine.last_threat().should_evade());
    assert!(!command.action.is_evade());
}

/// With a wider reaction window the same threat is evaded by dash, since its
/// danger stays below the teleport threshold.
#[test]
fn early_threat_is_dashed_with_wider_window() {
    let config = BossConfig {
        evade_reaction_window_seconds: 0.6,
        ..BossConfig::default()
    };
    let mut engine = BossEngine::new(config);
    let command = engine.update(
        DT,
        &BossState::default(),
        &standing_player(6.0, 0.0),
        &[lane_threat(0.1, 0.9)],
    );

    let threat = engine.last_threat();
    assert!(threat.should_evade());
    assert!(approx(threat.danger_score, 0.4325));
    assert_eq!(command.action, BossAction::DashEvade);
    assert!(approx(command.utility_score, 0.9546));
    assert!(approx(command.move_target.x, -4.5));
    assert!(approx(command.move_target.y, -1.4));
}

#[test]
fn lowered_teleport_threshold_picks_teleport() {
    let config = BossConfig {
        evade_reaction_window_seconds: 0.6,
        teleport_danger_threshold: 0.4,
        ..BossConfig::default()
    };
    let mut engine = BossEngine::new(config);
    let command = engine.update(
        DT,
        &BossState::default(),
        &standing_player(6.0, 0.0),
        &[lane_threat(0.1, 0.9)],
    );
    assert_eq!(command.action, BossAction::TeleportEvade);
}

/// Lane of fixed extent running through the boss at the origin.
fn static_lane(danger: f32) -> AbilityThreat {
    AbilityThreat {
        origin: Vec2::new(-5.0, 0.0),
        direction: Vec2::new(1.0, 0.0),
        speed: 0.0,
        range: 10.0,
        elapsed_seconds: 2.0,
        danger,
        ..AbilityThreat::default()
    }
}

#[test]
fn boss_inside_long_lived_static_lane_evades() {
    let mut engine = BossEngine::default();
    let command = engine.update(
        DT,
        &BossState::default(),
        &standing_player(6.0, 0.0),
        &[static_lane(1.0)],
    );
    assert!(engine.last_threat().should_evade());
    assert_eq!(command.action, BossAction::TeleportEvade);
}

/// A full-strength area effect on a casting player at optimal range scores
/// exactly 1.0 and outranks a low-danger evade.
#[test]
fn perfect_aoe_outranks_weak_evade() {
    let mut engine = BossEngine::default();
    let player = PlayerState {
        position: Vec2::new(9.0, 0.0),
        velocity: Vec2::ZERO,
        is_casting_high_impact: true,
    };
    let command = engine.update(DT, &BossState::default(), &player, &[static_lane(0.3)]);

    let evade = engine.candidates()[0];
    assert_eq!(evade.action, BossAction::DashEvade);
    assert!(approx(evade.score, 0.944));
    assert_eq!(command.action, BossAction::CastAoe);
    assert!(approx(command.utility_score, 1.0));
}

proptest! {
    /// Evasion wins unless another candidate scores strictly higher.
    #[test]
    fn evade_wins_unless_strictly_outscored(
        danger in 0.01f32..=1.0,
        distance in 0.0f32..20.0,
        vy in -10.0f32..10.0,
        casting in any::<bool>(),
        health in 0.0f32..=1.0,
    ) {
        let mut engine = BossEngine::default();
        let player = PlayerState {
            position: Vec2::new(distance, 3.0),
            velocity: Vec2::new(0.0, vy),
            is_casting_high_impact: casting,
        };
        let command = engine.update(
            DT,
            &BossState::new(Vec2::ZERO, health),
            &player,
            &[static_lane(danger)],
        );

        let candidates = engine.candidates();
        let evade = candidates[0];
        prop_assert!(evade.action.is_evade());
        prop_assert_eq!(evade.score, score_evade(engine.last_threat()));

        let outscored = candidates[1..].iter().any(|c| c.score > evade.score);
        prop_assert_eq!(command.action.is_evade(), !outscored);
    }
}

#[test]
fn stationary_intercept_aims_at_target() {
    let shooter = Vec2::new(-2.0, 1.0);
    let target = Vec2::new(4.0, 9.0);
    let lead = solve_intercept(shooter, 18.0, target, Vec2::ZERO, 1.2);
    assert!(lead.valid);
    assert_eq!(lead.aim_point, target);
    assert!(approx(lead.intercept_time, distance(shooter, target) / 18.0));
}

#[test]
fn identical_inputs_give_identical_commands() {
    let boss = BossState::new(Vec2::new(1.0, 1.0), 0.52);
    let player = PlayerState {
        position: Vec2::new(7.0, 2.5),
        velocity: Vec2::new(2.2, 0.5),
        is_casting_high_impact: false,
    };
    let threats = [lane_threat(0.3, 0.9)];

    let mut first = BossEngine::default();
    let mut second = BossEngine::default();
    for _ in 0..10 {
        let a = first.update(DT, &boss, &player, &threats);
        let b = second.update(DT, &boss, &player, &threats);
        assert_eq!(a, b);
        first.on_action_committed(a.action);
        second.on_action_committed(b.action);
    }
}
