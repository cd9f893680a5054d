use std::fs;

use fight_content::ContentFactory;
use fight_core::{MatchConfig, ScriptedRng};

const FIGHTERS: &str = r##"(
    fighters: [
        (name: "ALPHA", power: 60, speed: 60, intelligence: 60, color: "#111111", moves: ["Jab"]),
        (name: "BETA", power: 70, speed: 40, intelligence: 80, moves: ["Hook", "Uppercut"]),
    ],
)"##;

const STAGES: &str = r#"(
    stages: [
        (name: "DOJO", hazards: ["Loose tatami"]),
    ],
)"#;

#[test]
fn loads_roster_and_defaults_missing_settings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fighters.ron"), FIGHTERS).unwrap();
    fs::write(dir.path().join("stages.ron"), STAGES).unwrap();

    let factory = ContentFactory::new(dir.path());
    let roster = factory.load_roster().unwrap();
    assert_eq!(roster.fighters().len(), 2);
    assert_eq!(roster.stage("dojo").unwrap().hazards, vec!["Loose tatami"]);

    let mut rng = ScriptedRng::new([0.7]);
    let cpu = roster.random_opponent("ALPHA", &mut rng).unwrap();
    assert_eq!(cpu.name, "BETA");

    assert_eq!(factory.load_settings().unwrap(), MatchConfig::default());
}

#[test]
fn reads_settings_file_when_present() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("settings.toml"),
        "round_seconds = 60\nhazard_chance = 0.0\n",
    )
    .unwrap();

    let config = ContentFactory::new(dir.path()).load_settings().unwrap();
    assert_eq!(config.round_seconds, 60);
    assert_eq!(config.hazard_chance, 0.0);
}

#[test]
fn missing_roster_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path()).load_roster().unwrap_err();
    assert!(err.to_string().contains("fighters.ron"));
}

#[test]
fn invalid_fighter_fails_loading() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("fighters.ron"),
        r#"(fighters: [(name: "", power: 1, speed: 1, intelligence: 1, moves: ["M"])])"#,
    )
    .unwrap();
    fs::write(dir.path().join("stages.ron"), STAGES).unwrap();

    let err = ContentFactory::new(dir.path()).load_roster().unwrap_err();
    assert!(err.to_string().contains("name must not be empty"));
}
