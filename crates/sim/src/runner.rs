//! Frame loop driving a [`BossEngine`] through an [`EncounterScript`].
//!
//! Each frame:
//! 1. apply keyframes scheduled for this frame
//! 2. tick the engine and record the command
//! 3. commit the action (unless disabled or `None`)
//! 4. move the player by `velocity * dt` and age every threat by `dt`

use boss_content::EncounterScript;
use boss_core::{
    AbilityThreat, ActionCommand, BossAction, BossConfig, BossEngine, BossPhase, BossState,
    PlayerState, Vec2,
};
use serde::Serialize;

/// One frame's output, flattened for printing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u32,
    pub time_seconds: f32,
    pub boss_health: f32,
    pub player_position: Vec2,
    pub phase: BossPhase,
    pub action: BossAction,
    pub score: f32,
    pub move_target: Vec2,
    pub aim_point: Vec2,
    pub committed: bool,
}

impl FrameRecord {
    fn new(
        frame: u32,
        time_seconds: f32,
        boss: &BossState,
        player: &PlayerState,
        command: &ActionCommand,
        committed: bool,
    ) -> Self {
        Self {
            frame,
            time_seconds,
            boss_health: boss.health_ratio,
            player_position: player.position,
            phase: command.phase,
            action: command.action,
            score: command.utility_score,
            move_target: command.move_target,
            aim_point: command.aim_point,
            committed,
        }
    }

    /// Single-line human-readable rendering.
    pub fn to_text(&self) -> String {
        format!(
            "Frame {:>3} | phase={} | action={} | score={:.3} | moveTarget=({:.2}, {:.2}) | aimPoint=({:.2}, {:.2})",
            self.frame,
            self.phase,
            self.action,
            self.score,
            self.move_target.x,
            self.move_target.y,
            self.aim_point.x,
            self.aim_point.y,
        )
    }
}

/// Stateful encounter playback. Yields one [`FrameRecord`] per frame.
pub struct Simulation {
    engine: BossEngine,
    script: EncounterScript,
    boss: BossState,
    player: PlayerState,
    threats: Vec<AbilityThreat>,
    frame: u32,
    commit: bool,
}

impl Simulation {
    pub fn new(config: BossConfig, script: EncounterScript) -> Self {
        Self {
            engine: BossEngine::new(config),
            boss: script.boss,
            player: script.player,
            threats: script.threats.clone(),
            script,
            frame: 0,
            commit: true,
        }
    }

    /// Disables cooldown commits, so every frame sees fresh cooldowns.
    pub fn without_commits(mut self) -> Self {
        self.commit = false;
        self
    }

    pub fn engine(&self) -> &BossEngine {
        &self.engine
    }

    /// Runs one frame, or returns `None` once the script is exhausted.
    pub fn step(&mut self) -> Option<FrameRecord> {
        if self.frame >= self.script.frames {
            return None;
        }
        let frame = self.frame;
        let dt = self.script.dt_seconds;

        for key in self.script.keyframes_at(frame) {
            key.apply(&mut self.boss, &mut self.player);
            tracing::info!(
                frame,
                health = self.boss.health_ratio,
                casting = self.player.is_casting_high_impact,
                "keyframe applied"
            );
        }

        let command = self.engine.update(dt, &self.boss, &self.player, &self.threats);
        let committed = self.commit && command.action != BossAction::None;
        if committed {
            self.engine.on_action_committed(command.action);
        }
        let record = FrameRecord::new(
            frame,
            frame as f32 * dt,
            &self.boss,
            &self.player,
            &command,
            committed,
        );

        self.player.position += self.player.velocity * dt;
        for threat in &mut self.threats {
            threat.elapsed_seconds += dt;
        }
        self.frame += 1;

        Some(record)
    }
}

impl Iterator for Simulation {
    type Item = FrameRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}
