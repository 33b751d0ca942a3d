// ABOUTME: Nutrition intelligence module: validation, target synthesis, goal projection
// ABOUTME: Pure calculation functions with no shared state or I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure nutrition calculations. The metric validator runs first; callers
//! decide whether violations block the estimators.

/// Weeks-to-goal projection from body composition
pub mod goal_estimator;
/// Range checks for user-entered body metrics
pub mod metric_validator;
/// BMR, TDEE, BMI, and daily target synthesis
pub mod nutrition_calculator;

pub use goal_estimator::{estimate_weeks_to_goal, estimate_weeks_to_goal_with_config};
pub use metric_validator::{
    validate_body_fat, validate_metrics, validate_metrics_with_ranges, validate_target_body_fat,
};
pub use nutrition_calculator::{
    calculate_bmi, calculate_bmr, calculate_macro_percentages, calculate_mifflin_st_jeor,
    calculate_nutrition_targets, calculate_tdee, calculate_tdee_for_key,
    compute_nutrition_targets, TargetParams,
};
