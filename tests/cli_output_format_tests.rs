// Integration tests for the lifeline binary: text, JSON and CSV output
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;

fn lifeline() -> Command {
    Command::cargo_bin("lifeline").unwrap()
}

// ============================================================================
// Text Output Tests
// ============================================================================

#[test]
fn test_text_default_form_values() {
    lifeline()
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Current Attendance: 66.67%"))
        .stdout(predicate::str::contains(
            "minimum of 5 consecutive additional classes",
        ))
        .stdout(predicate::str::contains("75.00%"));
}

#[test]
fn test_text_goal_already_met() {
    lifeline()
        .args(["-a", "10", "-t", "15", "-r", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Great news!"))
        .stdout(predicate::str::contains("required 60.0%"));
}

#[test]
fn test_text_unreachable_target() {
    lifeline()
        .args(["-a", "0", "-t", "5", "-r", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IMPOSSIBLE"))
        .stdout(predicate::str::contains("Heads-up"));
}

#[test]
fn test_text_planning_ahead_with_slack() {
    lifeline()
        .args(["-a", "18", "-t", "20", "-r", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planning Ahead"))
        .stdout(predicate::str::contains("miss up to 3"));
}

#[test]
fn test_text_explain() {
    lifeline()
        .arg("--explain")
        .assert()
        .success()
        .stdout(predicate::str::contains("How the math works"))
        .stdout(predicate::str::contains("(10 + x) / (15 + x) >= 0.7500"));
}

#[test]
fn test_text_series_length_follows_flag() {
    let output = lifeline().args(["--series-end", "3"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("How Flexible Can You Be?"));
    // header + 3 rows between the table heading and the footer line
    let rows = stdout
        .lines()
        .skip_while(|line| !line.contains("window"))
        .skip(1)
        .take_while(|line| !line.starts_with("The more classes"))
        .count();
    assert_eq!(rows, 3);
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_valid_format() {
    lifeline()
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\":"))
        .stdout(predicate::str::contains("\"format\": \"lifeline-json-v1\""))
        .stdout(predicate::str::contains("\"plan\":"))
        .stdout(predicate::str::contains("\"series\":"));
}

#[test]
fn test_json_output_parses() {
    let output = lifeline().args(["--format", "json"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["format"], "lifeline-json-v1");
    assert_eq!(parsed["input"]["classes_attended"], 10);
    assert_eq!(parsed["plan"]["min_additional"], 5);
    assert_eq!(parsed["plan"]["projected_percent"], 75.0);
    assert_eq!(parsed["missable"]["found"], true);
    assert_eq!(parsed["missable"]["future_window"], 5);
    assert_eq!(parsed["missable"]["max_future_classes"], 50);
    assert_eq!(parsed["series"].as_array().unwrap().len(), 30);
}

#[test]
fn test_json_unreachable() {
    let output = lifeline()
        .args(["--format", "json", "-a", "4", "-t", "5", "-r", "100"])
        .output()
        .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert!(parsed["plan"]["min_additional"].is_null());
    assert_eq!(parsed["plan"]["unreachable"], true);
    assert_eq!(parsed["missable"]["found"], false);
    assert_eq!(parsed["missable"]["max_missable"], 0);
    assert_eq!(parsed["missable"]["future_window"], 0);
}

#[test]
fn test_json_max_future_flag() {
    let output = lifeline()
        .args(["--format", "json", "-a", "0", "-t", "20", "-r", "90"])
        .args(["--max-future", "200"])
        .output()
        .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(parsed["missable"]["found"], true);
    assert_eq!(parsed["missable"]["future_window"], 180);
}

// ============================================================================
// CSV Output Tests
// ============================================================================

#[test]
fn test_csv_series_output() {
    lifeline()
        .args(["--format", "csv", "--series-end", "13"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("window,missable\n1,0\n"))
        .stdout(predicate::str::contains("9,1\n"))
        .stdout(predicate::str::ends_with("13,2\n"));
}

// ============================================================================
// Input Validation Tests
// ============================================================================

#[test]
fn test_attended_exceeds_total_rejected() {
    lifeline()
        .args(["-a", "16", "-t", "15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Classes attended (16) cannot be greater than total classes conducted (15)",
        ));
}

#[test]
fn test_zero_total_rejected() {
    lifeline()
        .args(["-a", "0", "-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than zero"));
}

#[test]
fn test_required_out_of_range_rejected() {
    lifeline()
        .args(["-r", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 100"));
}

#[test]
fn test_zero_search_ceiling_rejected() {
    lifeline()
        .args(["--max-future", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_future_classes must be at least 1"));
}

#[test]
fn test_debug_logs_to_stderr() {
    lifeline()
        .arg("--debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action Plan"))
        .stderr(predicate::str::contains("attendance report built"));
}
