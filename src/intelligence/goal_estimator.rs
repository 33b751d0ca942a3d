// ABOUTME: Projects weeks needed to reach a target body fat percentage
// ABOUTME: Holds lean mass constant and assumes a fixed share of weight lost is fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::TargetConfig;
use meal_planner_core::models::GoalEstimate;

/// Estimate whole weeks until `target_body_fat` is reached, with default settings
///
/// A non-positive `weekly_weight_loss_kg` can never reach the goal and yields
/// [`GoalEstimate::Unattainable`] rather than an infinite or NaN week count.
#[must_use]
pub fn estimate_weeks_to_goal(
    current_weight_kg: f64,
    current_body_fat_percent: f64,
    target_body_fat_percent: f64,
    weekly_weight_loss_kg: f64,
) -> GoalEstimate {
    estimate_weeks_to_goal_with_config(
        current_weight_kg,
        current_body_fat_percent,
        target_body_fat_percent,
        weekly_weight_loss_kg,
        &TargetConfig::default(),
    )
}

/// Estimate whole weeks until `target_body_fat` is reached
///
/// 1. fat mass = weight x body fat
/// 2. lean mass = weight - fat mass (held constant)
/// 3. target weight = lean mass / (1 - target body fat)
/// 4. fat to lose = fat mass - target weight x target body fat
/// 5. weight to lose = fat to lose / `fat_loss_fraction` (0.7)
/// 6. weeks = ceil(weight to lose / weekly loss)
///
/// A goal that is already met gives `Weeks(0)`.
#[must_use]
pub fn estimate_weeks_to_goal_with_config(
    current_weight_kg: f64,
    current_body_fat_percent: f64,
    target_body_fat_percent: f64,
    weekly_weight_loss_kg: f64,
    config: &TargetConfig,
) -> GoalEstimate {
    if !weekly_weight_loss_kg.is_finite() || weekly_weight_loss_kg <= 0.0 {
        return GoalEstimate::Unattainable;
    }

    let current_fat_mass = current_weight_kg * current_body_fat_percent / 100.0;
    let lean_mass = current_weight_kg - current_fat_mass;
    let target_weight = lean_mass / (1.0 - target_body_fat_percent / 100.0);
    let target_fat_mass = target_weight * target_body_fat_percent / 100.0;

    let fat_to_lose = current_fat_mass - target_fat_mass;
    let weight_to_lose = fat_to_lose / config.fat_loss_fraction;
    let weeks = (weight_to_lose / weekly_weight_loss_kg).ceil();

    if !weeks.is_finite() || weeks > f64::from(u32::MAX) {
        // target body fat of 100% leaves no lean mass to hold constant;
        // a vanishing weekly loss overflows the week count
        return GoalEstimate::Unattainable;
    }
    if weeks <= 0.0 {
        return GoalEstimate::Weeks(0);
    }
    GoalEstimate::Weeks(weeks as u32)
}
