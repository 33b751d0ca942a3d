// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for the meal-planner-cli binary
// ABOUTME: Checks exit codes and the JSON each subcommand prints on stdout

//! Integration tests for the meal-planner-cli binary.
//!
//! These tests verify JSON output, exit codes, and error reporting.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use meal_planner::constants::env_config;
use serde_json::Value;
use std::process::Command;

const REFERENCE_METRICS: [&str; 10] = [
    "--weight", "70", "--height", "170", "--age", "25", "--gender", "male", "--body-fat", "20",
];

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_meal-planner-cli"));
    command.args(args).env_remove("RUST_LOG");
    for name in [
        env_config::DEFAULT_DEFICIT,
        env_config::MALE_CALORIE_FLOOR,
        env_config::FEMALE_CALORIE_FLOOR,
        env_config::PROTEIN_G_PER_KG,
        env_config::FAT_FRACTION,
        env_config::DEFAULT_TARGET_BODY_FAT,
    ] {
        command.env_remove(name);
    }
    let output = command.output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn run_json(args: &[&str]) -> (i32, Value) {
    let (exit_code, stdout, stderr) = run_cli(args);
    let json = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {stdout}\nstderr: {stderr}"));
    (exit_code, json)
}

fn with_metrics<'a>(command: &'a str, extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![command];
    args.extend(REFERENCE_METRICS);
    args.extend_from_slice(extra);
    args
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_reference_metrics_succeeds() {
    let (exit_code, json) = run_json(&with_metrics("validate", &[]));

    assert_eq!(exit_code, 0);
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"], serde_json::json!([]));
}

#[test]
fn test_validate_out_of_range_exits_non_zero_with_ordered_errors() {
    let (exit_code, json) = run_json(&[
        "validate", "--weight", "10", "--height", "170", "--age", "12", "--gender", "female",
        "--body-fat", "75",
    ]);

    assert_eq!(exit_code, 1, "invalid metrics should exit with 1");
    assert_eq!(json["valid"], false);
    assert_eq!(
        json["errors"],
        serde_json::json!([
            "Weight must be between 30-300 kg",
            "Age must be between 15-100 years",
            "Body fat must be between 3-60%"
        ])
    );
}

// ============================================================================
// targets
// ============================================================================

#[test]
fn test_targets_reference_profile() {
    let (exit_code, json) = run_json(&with_metrics("targets", &["--activity", "moderate"]));

    assert_eq!(exit_code, 0);
    assert_eq!(json["daily_calorie_target"], 2046.0);
    assert_eq!(json["protein_target_g"], 140.0);
    assert_eq!(json["fat_target_g"], 61.0);
    assert_eq!(json["carb_target_g"], 234.0);
    assert_eq!(json["estimated_weekly_weight_loss_kg"], 0.45);
    assert_eq!(json["estimated_time_to_goal"]["weeks"], 18);
    assert_eq!(json["activity_level"], "moderate");
}

#[test]
fn test_targets_unknown_activity_uses_sedentary_multiplier() {
    let (exit_code, json) = run_json(&with_metrics("targets", &["--activity", "couch_potato"]));
    let (_, sedentary) = run_json(&with_metrics("targets", &["--activity", "sedentary"]));

    assert_eq!(exit_code, 0);
    assert_eq!(json["activity_level"], "sedentary");
    // 1642.5 x 1.2
    assert_eq!(json["tdee"], 1971.0);
    assert_eq!(json["tdee"], sedentary["tdee"]);
    // 1471 kcal raised to the male floor
    assert_eq!(json["daily_calorie_target"], 1500.0);
}

#[test]
fn test_targets_invalid_metrics_prints_error_response() {
    let (exit_code, json) = run_json(&[
        "targets", "--weight", "400", "--height", "170", "--age", "25", "--gender", "male",
        "--body-fat", "20",
    ]);

    assert_eq!(exit_code, 1);
    assert_eq!(json["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(
        json["error"]["details"]["errors"][0],
        "Weight must be between 30-300 kg"
    );
}

// ============================================================================
// goal, bmi, macros
// ============================================================================

#[test]
fn test_goal_zero_weekly_loss_is_unattainable() {
    let (exit_code, json) = run_json(&[
        "goal",
        "--weight",
        "70",
        "--body-fat",
        "20",
        "--target-body-fat",
        "13",
        "--weekly-loss",
        "0",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(json["estimated_time_to_goal"], "unattainable");
    assert_eq!(json["weeks"], Value::Null);
}

#[test]
fn test_goal_rejects_out_of_range_body_fat() {
    let (exit_code, json) = run_json(&[
        "goal",
        "--weight",
        "70",
        "--body-fat",
        "20",
        "--target-body-fat",
        "150",
        "--weekly-loss",
        "0.45",
    ]);

    assert_eq!(exit_code, 1);
    assert_eq!(
        json["error"]["details"]["errors"],
        serde_json::json!(["Target body fat must be between 3-60%"])
    );
}

#[test]
fn test_goal_reference_weeks() {
    let (exit_code, json) = run_json(&[
        "goal",
        "--weight",
        "70",
        "--body-fat",
        "20",
        "--target-body-fat",
        "13",
        "--weekly-loss",
        "0.45",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(json["weeks"], 18);
}

#[test]
fn test_bmi_and_macros() {
    let (exit_code, json) = run_json(&["bmi", "--weight", "70", "--height", "170"]);
    assert_eq!(exit_code, 0);
    assert!((json["bmi"].as_f64().unwrap() - 24.221_453).abs() < 1e-6);

    let (exit_code, json) = run_json(&["macros", "--protein", "140", "--carbs", "234", "--fat", "61"]);
    assert_eq!(exit_code, 0);
    assert_eq!(json["protein_percent"], 27.0);
    assert_eq!(json["carb_percent"], 46.0);
    assert_eq!(json["fat_percent"], 27.0);
}

#[test]
fn test_cli_help_lists_subcommands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for subcommand in ["validate", "targets", "goal", "bmi", "macros"] {
        assert!(stdout.contains(subcommand), "help should mention {subcommand}");
    }
}
