//! End-to-end tests for `acvs-display render` command.
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
fn test_render_basic_succeeds() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());
    let out_path = config_temp.path().join("display.svg");

    let output = Command::new(acvs_bin())
        .args([
            "render",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Render should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(
        out_path.exists(),
        "SVG file should exist at: {}",
        out_path.display()
    );

    let content = fs::read_to_string(&out_path).expect("Failed to read SVG file");
    assert!(content.starts_with("<svg "));
    assert_eq!(content.matches("<rect ").count(), SQUARES);
    assert_eq!(content.matches("<text ").count(), SQUARES);
    assert!(content.contains(r#"id="sq_0""#));
    assert!(content.contains(r#"id="sq_53""#));
}

#[test]
fn test_render_classes_follow_encodings() {
    let display = example_display(&uniform_encoding('2'), &uniform_encoding('3'));
    let (config_path, config_temp) = temp_config(display);
    let out_path = config_temp.path().join("display.svg");

    let output = Command::new(acvs_bin())
        .args([
            "render",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    assert_eq!(content.matches(r#"class="cyan target""#).count(), SQUARES);
    assert!(content.contains(r#"fill="rgb(0, 150, 150)""#));
}

#[test]
fn test_render_no_digits() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());
    let out_path = config_temp.path().join("display.svg");

    let output = Command::new(acvs_bin())
        .args([
            "render",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--no-digits",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    assert_eq!(content.matches("<rect ").count(), SQUARES);
    assert!(!content.contains("<text"));
}

#[test]
fn test_render_failure_writes_nothing() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());
    let out_path = config_temp.path().join("display.svg");
    let mut digits = uniform_encoding('1');
    digits.replace_range(0..1, "x");

    let output = Command::new(acvs_bin())
        .args([
            "render",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--digits",
            digits.as_str(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!out_path.exists(), "No SVG should be written on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid digit"), "stderr: {stderr}");
}

#[test]
fn test_render_unwritable_output_is_io_error() {
    let (config_path, config_temp) = temp_config(DisplayConfig::default());
    let out_path = config_temp.path().join("missing_dir").join("display.svg");

    let output = Command::new(acvs_bin())
        .args([
            "render",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
