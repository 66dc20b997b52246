use std::io::Write;

use boss_content::{ConfigLoader, EncounterLoader, EncounterScript};
use boss_core::{BossConfig, Vec2};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn config_file_overrides_defaults() {
    let file = write_temp(
        r#"
        # Faster, more evasive boss
        projectile_speed = 22.0
        evade_reaction_window_seconds = 0.6
        teleport_danger_threshold = 0.5
        "#,
    );

    let config = ConfigLoader::load(file.path()).expect("load config");
    assert_eq!(config.projectile_speed, 22.0);
    assert_eq!(config.evade_reaction_window_seconds, 0.6);
    assert_eq!(config.teleport_danger_threshold, 0.5);
    assert_eq!(config.dash_distance, BossConfig::default().dash_distance);
}

#[test]
fn config_error_names_the_file() {
    let file = write_temp("defensive_exit_health_ratio = 0.1\n");
    let err = ConfigLoader::load(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains(&file.path().display().to_string()), "{message}");
    assert!(message.contains("defensive_exit_health_ratio"), "{message}");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");
    let err = ConfigLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn encounter_file_matches_builtin_demo() {
    let file = write_temp(
        r#"(
            frames: 20,
            dt_seconds: 0.1,
            boss: (position: (x: 0.0, y: 0.0), health_ratio: 0.52),
            player: (
                position: (x: 7.0, y: 2.5),
                velocity: (x: 2.2, y: 0.5),
                is_casting_high_impact: false,
            ),
            threats: [
                (
                    origin: (x: 10.0, y: 2.0),
                    direction: (x: -1.0, y: 0.0),
                    speed: 15.0,
                    width: 0.7,
                    range: 14.0,
                    elapsed_seconds: 0.1,
                    danger: 0.9,
                ),
                (
                    origin: (x: 2.0, y: -8.0),
                    direction: (x: 0.0, y: 1.0),
                    speed: 8.0,
                    width: 1.0,
                    range: 10.0,
                    danger: 0.4,
                ),
            ],
            keyframes: [
                (frame: 8, boss_health: Some(0.39)),
                (frame: 14, boss_health: Some(0.17), player_casting: Some(true)),
            ],
        )"#,
    );

    let script = EncounterLoader::load(file.path()).expect("load encounter");
    assert_eq!(script, EncounterScript::demo());
    assert_eq!(script.player.position, Vec2::new(7.0, 2.5));
}
