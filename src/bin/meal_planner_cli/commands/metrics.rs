// ABOUTME: Metric commands for meal-planner-cli
// ABOUTME: Handles validate, targets, and bmi operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use meal_planner::config::NutritionConfig;
use meal_planner::errors::{AppError, AppResult};
use meal_planner::intelligence::{
    calculate_bmi, calculate_macro_percentages, calculate_nutrition_targets,
    validate_metrics_with_ranges, validate_target_body_fat, TargetParams,
};
use meal_planner::models::{ActivityLevel, MacroPercentages, MetricInput, NutritionTargets};
use serde::Serialize;
use serde_json::json;
use std::process::ExitCode;
use tracing::info;

use crate::helpers::output::print_json;

#[derive(Serialize)]
struct TargetsReport {
    activity_level: ActivityLevel,
    bmi: f64,
    #[serde(flatten)]
    targets: NutritionTargets,
    macro_percentages: MacroPercentages,
}

/// Print the validation result; exits non-zero when any metric is out of range
pub fn validate(input: &MetricInput) -> AppResult<ExitCode> {
    let config = NutritionConfig::global();
    let result = validate_metrics_with_ranges(input, &config.metric_ranges);
    print_json(&result)?;

    if result.valid {
        Ok(ExitCode::SUCCESS)
    } else {
        info!(violations = result.errors.len(), "Metrics failed validation");
        Ok(ExitCode::FAILURE)
    }
}

/// Validate metrics, then print the daily targets with their macro split
pub fn targets(
    input: &MetricInput,
    activity: &str,
    deficit_kcal: Option<f64>,
    target_body_fat_percent: Option<f64>,
) -> AppResult<ExitCode> {
    let config = NutritionConfig::global();

    let mut validation = validate_metrics_with_ranges(input, &config.metric_ranges);
    if let Some(message) = target_body_fat_percent
        .and_then(|target| validate_target_body_fat(target, &config.metric_ranges))
    {
        validation.errors.push(message);
    }
    if !validation.errors.is_empty() {
        return Err(AppError::metrics_out_of_range(&validation.errors));
    }
    if deficit_kcal.is_some_and(|deficit| !deficit.is_finite() || deficit < 0.0) {
        return Err(AppError::invalid_input(
            "Deficit must be a non-negative number of kcal",
        ));
    }

    let activity_level = ActivityLevel::from_key_or_sedentary(activity);
    let targets = calculate_nutrition_targets(
        &TargetParams {
            metrics: *input,
            activity_level,
            deficit_kcal,
            target_body_fat_percent,
        },
        config,
    );

    let report = TargetsReport {
        activity_level,
        bmi: calculate_bmi(input.weight_kg, input.height_cm),
        macro_percentages: calculate_macro_percentages(
            targets.protein_target_g,
            targets.carb_target_g,
            targets.fat_target_g,
        ),
        targets,
    };
    print_json(&report)?;
    Ok(ExitCode::SUCCESS)
}

/// Print Body Mass Index for weight and height
pub fn bmi(weight_kg: f64, height_cm: f64) -> AppResult<ExitCode> {
    if !(weight_kg.is_finite() && height_cm.is_finite() && height_cm > 0.0) {
        return Err(AppError::invalid_input(
            "Weight and height must be finite and height must be positive",
        ));
    }
    print_json(&json!({ "bmi": calculate_bmi(weight_kg, height_cm) }))?;
    Ok(ExitCode::SUCCESS)
}
