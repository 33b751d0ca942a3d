// ABOUTME: Goal and macro commands for meal-planner-cli
// ABOUTME: Handles weeks-to-goal projection and macro calorie split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use meal_planner::config::NutritionConfig;
use meal_planner::errors::{AppError, AppResult};
use meal_planner::intelligence::{
    calculate_macro_percentages, estimate_weeks_to_goal_with_config, validate_body_fat,
    validate_target_body_fat,
};
use serde_json::json;
use std::process::ExitCode;

use crate::helpers::output::print_json;

/// Validate both body fat values, then print the projected weeks to reach the target
pub fn weeks_to_goal(
    weight_kg: f64,
    body_fat_percent: f64,
    target_body_fat_percent: f64,
    weekly_loss_kg: f64,
) -> AppResult<ExitCode> {
    let config = NutritionConfig::global();
    let violations: Vec<String> = [
        validate_body_fat(body_fat_percent, &config.metric_ranges),
        validate_target_body_fat(target_body_fat_percent, &config.metric_ranges),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !violations.is_empty() {
        return Err(AppError::metrics_out_of_range(&violations));
    }

    let estimate = estimate_weeks_to_goal_with_config(
        weight_kg,
        body_fat_percent,
        target_body_fat_percent,
        weekly_loss_kg,
        &config.targets,
    );
    print_json(&json!({
        "estimated_time_to_goal": estimate,
        "weeks": estimate.weeks(),
    }))?;
    Ok(ExitCode::SUCCESS)
}

/// Print the calorie share of each macronutrient
pub fn macros(protein_g: f64, carbs_g: f64, fat_g: f64) -> AppResult<ExitCode> {
    print_json(&calculate_macro_percentages(protein_g, carbs_g, fat_g))?;
    Ok(ExitCode::SUCCESS)
}
