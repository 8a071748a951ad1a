//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "spp-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Student Performance Predictor"),
        "Should show app name"
    );
    assert!(stdout.contains("generate"), "Should show generate command");
    assert!(stdout.contains("predict"), "Should show predict command");
    assert!(stdout.contains("status"), "Should show status command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "spp-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("spp"), "Should show binary name");
}

/// Test generating a sample dataset end to end
#[test]
fn test_generate_writes_csv() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sample.csv");

    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "spp-cli",
            "--",
            "generate",
            "--output",
            path.to_str().unwrap(),
            "--count",
            "50",
            "--seed",
            "7",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "generate should succeed");

    let contents = std::fs::read_to_string(&path).expect("CSV should exist");
    let mut lines = contents.lines();

    assert_eq!(
        lines.next().unwrap(),
        "weekly_self_study_hours,attendance_percentage,class_participation,total_score"
    );
    assert_eq!(lines.count(), 50, "Should write one row per record");
}
