//! End-to-end tests for `acvs-display generate` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use acvs_display::config::DisplayConfig;
use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the acvs-display binary
fn acvs_bin() -> &'static str {
    env!("CARGO_BIN_EXE_acvs-display")
}

#[test]
fn test_generate_json_succeeds() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());

    let output = Command::new(acvs_bin())
        .args(["generate", "--json", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generate should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let squares = value.as_array().expect("JSON should be an array");
    assert_eq!(squares.len(), SQUARES);

    for (i, square) in squares.iter().enumerate() {
        assert_eq!(square["position_label"], i.to_string());
    }
    assert_eq!(squares[0]["ring"], "outer");
    assert_eq!(squares[24]["ring"], "middle");
    assert_eq!(squares[42]["ring"], "inner");
}

#[test]
fn test_generate_text_report() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());

    let output = Command::new(acvs_bin())
        .args(["generate", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), SQUARES + 2);
    assert!(stdout.contains("targets: 2 of 54"));
}

#[test]
fn test_generate_overrides_encodings() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());
    let mut digits = uniform_encoding('8');
    digits.replace_range(SQUARES - 1.., "5");

    let output = Command::new(acvs_bin())
        .args([
            "generate",
            "--json",
            "--config",
            config_path.to_str().unwrap(),
            "--colors",
            uniform_encoding('1').as_str(),
            "--digits",
            digits.as_str(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let squares = value.as_array().unwrap();
    assert_eq!(squares[0]["digit"], "5");
    assert_eq!(squares[0]["classification"], "target");
    assert_eq!(squares[1]["classification"], "nontarget");
    assert!(squares.iter().all(|s| s["color"] == "gray"));
}

#[test]
fn test_generate_short_encoding_fails() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());
    let short: String = uniform_encoding('1').chars().skip(1).collect();

    let output = Command::new(acvs_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--digits",
            short.as_str(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "No layout should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("digit_encoding"), "stderr: {stderr}");
}

#[test]
fn test_generate_invalid_color_index_fails() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());

    let output = Command::new(acvs_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--colors",
            uniform_encoding('3').as_str(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid color index"), "stderr: {stderr}");
}

#[test]
fn test_generate_writes_output_file() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());
    let out_path = config_temp.path().join("layout.json");

    let output = Command::new(acvs_bin())
        .args([
            "generate",
            "--json",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let content = fs::read_to_string(&out_path).expect("Failed to read output file");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(SQUARES));
}

#[test]
fn test_generate_missing_config_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let output = Command::new(acvs_bin())
        .args(["generate", "--config", missing.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
