// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, metric ranges, and service identifiers for the meal planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! The calculator's published behaviour is defined by these values; the runtime
//! configuration layer uses them as its defaults.

/// Energy, macro, and formula constants for the nutrition calculator
pub mod nutrition;

/// Accepted ranges for user-supplied body metrics
pub mod ranges;

/// Service names used in structured logs
pub mod service_names {
    /// Library and CLI service name
    pub const MEAL_PLANNER: &str = "meal-planner";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Override for the default calorie deficit (kcal/day)
    pub const DEFAULT_DEFICIT: &str = "MEAL_PLANNER_DEFAULT_DEFICIT_KCAL";
    /// Override for the male calorie floor (kcal/day)
    pub const MALE_CALORIE_FLOOR: &str = "MEAL_PLANNER_MALE_CALORIE_FLOOR";
    /// Override for the female calorie floor (kcal/day)
    pub const FEMALE_CALORIE_FLOOR: &str = "MEAL_PLANNER_FEMALE_CALORIE_FLOOR";
    /// Override for the protein ratio (g per kg body weight)
    pub const PROTEIN_G_PER_KG: &str = "MEAL_PLANNER_PROTEIN_G_PER_KG";
    /// Override for the fat share of daily calories (0.0-1.0)
    pub const FAT_FRACTION: &str = "MEAL_PLANNER_FAT_FRACTION";
    /// Override for the default target body fat percentage
    pub const DEFAULT_TARGET_BODY_FAT: &str = "MEAL_PLANNER_DEFAULT_TARGET_BODY_FAT";
}
