// ABOUTME: Calculation result models for nutrition targets and goal projection
// ABOUTME: NutritionTargets, GoalEstimate, MacroPercentages, and ValidationResult records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Projected time to reach a body-fat goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalEstimate {
    /// Goal reached after this many whole weeks (0 when already met)
    Weeks(u32),
    /// No attainable goal under the current plan (no weekly weight loss)
    Unattainable,
}

impl GoalEstimate {
    /// Week count, if the goal is attainable
    #[must_use]
    pub const fn weeks(self) -> Option<u32> {
        match self {
            Self::Weeks(weeks) => Some(weeks),
            Self::Unattainable => None,
        }
    }

    /// Whether the plan reaches the goal at all
    #[must_use]
    pub const fn is_attainable(self) -> bool {
        matches!(self, Self::Weeks(_))
    }
}

/// Published daily nutrition targets
///
/// Always produced whole by one calculation; callers replace the record
/// rather than patching individual fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Basal Metabolic Rate, rounded (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure, rounded (kcal/day)
    pub tdee: f64,
    /// Daily calorie target after deficit and safety floor, rounded (kcal/day)
    pub daily_calorie_target: f64,
    /// Protein (g/day)
    pub protein_target_g: f64,
    /// Carbohydrates (g/day); negative at extreme inputs
    pub carb_target_g: f64,
    /// Fat (g/day)
    pub fat_target_g: f64,
    /// Expected weekly weight loss, two decimals (kg/week)
    pub estimated_weekly_weight_loss_kg: f64,
    /// Projected time to the target body fat
    pub estimated_time_to_goal: GoalEstimate,
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carb_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// Outcome of range-checking a `MetricInput`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// True when no field is out of range
    pub valid: bool,
    /// One message per violated field, in weight, height, age, body fat order
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from the collected violations
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
