//! Integration tests for the `dandd` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO: &str = r#"{
    "starting_attributes": {"STR": 10, "DEX": 12, "CON": 11, "INT": 9, "WIS": 14, "CHA": 8},
    "questions": [
        {
            "year": 1,
            "question": "A bully blocks the road.",
            "answers_pool": [
                {
                    "id": "Y1A1",
                    "description": "You fight back",
                    "attribute_rewards": {"STR": 2},
                    "test_attribute": "STR",
                    "dc": 1,
                    "fail_penalty": {"DEX": 1}
                }
            ]
        },
        {
            "year": 2,
            "question": "The river floods.",
            "answers_pool": [
                {
                    "id": "Y2A1",
                    "description": "You swim for it",
                    "attribute_rewards": {"CON": 1},
                    "test_attribute": "constitution",
                    "dc": 40,
                    "fail_penalty": {"CON": 2}
                }
            ]
        }
    ]
}"#;

/// Write a scenario into a temp dir and return the dir and file path.
fn scenario_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("character_creation.json");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn dandd() -> Command {
    let mut cmd = Command::cargo_bin("dandd").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn create_args(path: &Path) -> Vec<String> {
    vec![
        "create".to_string(),
        "-d".to_string(),
        path.to_str().unwrap().to_string(),
        "--name".to_string(),
        "Aria".to_string(),
        "--job".to_string(),
        "Ranger".to_string(),
        "--seed".to_string(),
        "5".to_string(),
        "--delay-ms".to_string(),
        "0".to_string(),
    ]
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[test]
fn create_prints_full_transcript() {
    let (_dir, path) = scenario_file(SCENARIO);
    dandd()
        .args(create_args(&path))
        .arg("--yes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "Initial attributes: STR: 10, DEX: 12, CON: 11, INT: 9, WIS: 14, CHA: 8",
            )
            .and(predicate::str::contains("Year 1: A bully blocks the road."))
            .and(predicate::str::contains("Selected answer: You fight back"))
            .and(predicate::str::contains("- Attribute to test STR[10] DC: 1"))
            .and(predicate::str::contains("- Attribute increases: STR: 2"))
            .and(predicate::str::contains("- Attribute fail effects: DEX: 1"))
            .and(predicate::str::contains("Test passed! Applying increases."))
            .and(predicate::str::contains("- Increased strength by 2"))
            .and(predicate::str::contains("Test failed! Applying fail effects."))
            .and(predicate::str::contains("- Decreased constitution by 2"))
            .and(predicate::str::contains("Name: Aria"))
            .and(predicate::str::contains("Job: Ranger"))
            .and(predicate::str::contains(
                "Attributes: STR: 12, DEX: 12, CON: 9, INT: 9, WIS: 14, CHA: 8",
            )),
        );
}

#[test]
fn create_waits_for_enter_before_each_roll() {
    let (_dir, path) = scenario_file(SCENARIO);
    dandd()
        .args(create_args(&path))
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to roll the dice").count(2));
}

#[test]
fn create_fails_when_input_closes_before_roll() {
    let (_dir, path) = scenario_file(SCENARIO);
    dandd()
        .args(create_args(&path))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn create_prompts_for_name_and_job() {
    let (_dir, path) = scenario_file(SCENARIO);
    dandd()
        .args([
            "create",
            "-d",
            path.to_str().unwrap(),
            "--delay-ms",
            "0",
            "--yes",
        ])
        .write_stdin("  Bram \nSmith\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Enter character name: ")
                .and(predicate::str::contains("Name: Bram\n"))
                .and(predicate::str::contains("Job: Smith\n")),
        );
}

#[test]
fn create_json_output() {
    let (_dir, path) = scenario_file(SCENARIO);
    let output = dandd()
        .args(create_args(&path))
        .args(["--yes", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.rfind("{\n  \"name\"").unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();
    assert_eq!(json["name"], "Aria");
    assert_eq!(json["job"], "Ranger");
    assert_eq!(json["attributes"]["STR"], 12);
    assert_eq!(json["attributes"]["CON"], 9);
}

#[test]
fn create_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    dandd()
        .args(create_args(&missing))
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read scenario"));
}

#[test]
fn create_fails_on_malformed_file() {
    let (_dir, path) = scenario_file("{\"questions\": [");
    dandd()
        .args(create_args(&path))
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse scenario"));
}

#[test]
fn create_aborts_on_unknown_test_attribute() {
    let (_dir, path) = scenario_file(
        r#"{"questions": [{"year": 1, "question": "Q", "answers_pool": [
            {"id": "bad", "description": "d", "test_attribute": "luck", "dc": 5}
        ]}]}"#,
    );
    dandd()
        .args(create_args(&path))
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attribute 'luck'"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_valid_scenario() {
    let (_dir, path) = scenario_file(SCENARIO);
    dandd()
        .args(["check", "-d", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A bully blocks the road.")
                .and(predicate::str::contains("All checks passed"))
                .and(predicate::str::contains("2 questions")),
        );
}

#[test]
fn check_reports_problems() {
    let (_dir, path) = scenario_file(
        r#"{"questions": [
            {"year": 1, "question": "Q1", "answers_pool": []},
            {"year": 2, "question": "Q2", "answers_pool": [
                {"id": "bad", "description": "d", "test_attribute": "luck", "dc": 5}
            ]}
        ]}"#,
    );
    dandd()
        .args(["check", "-d", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("empty answer pool")
                .and(predicate::str::contains("luck")),
        );
}

#[test]
fn check_bundled_scenario() {
    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../assets/data/character_creation.json");
    dandd()
        .args(["check", "-d", bundled.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}
