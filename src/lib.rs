// ABOUTME: Main library entry point for the meal planner nutrition engine
// ABOUTME: Metric validation, calorie and macro targets, goal projection, and profile recalculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Planner
//!
//! Nutrition engine for a weight-loss meal planner. Given body metrics and an
//! activity level it validates the inputs, estimates basal and total energy
//! expenditure, and derives daily calorie and macronutrient targets plus a
//! projection of how long the body fat goal will take.
//!
//! ## Architecture
//!
//! - **Models**: Shared domain types, re-exported from `meal-planner-core`
//! - **Intelligence**: Pure calculation functions (validator, calculator, goal estimator)
//! - **Profile**: Keeps derived targets in step with the body metrics they depend on
//! - **Config**: Tunable coefficients with environment overrides
//!
//! ## Example Usage
//!
//! ```rust
//! use meal_planner::intelligence::{compute_nutrition_targets, validate_metrics};
//! use meal_planner::models::{ActivityLevel, Gender, MetricInput};
//!
//! let input = MetricInput {
//!     weight_kg: 70.0,
//!     height_cm: 170.0,
//!     age: 25,
//!     gender: Gender::Male,
//!     body_fat_percent: 20.0,
//! };
//! assert!(validate_metrics(&input).valid);
//!
//! let targets = compute_nutrition_targets(&input, ActivityLevel::Moderate, None);
//! assert!((targets.protein_target_g - 140.0).abs() < f64::EPSILON);
//! ```

/// Nutrition configuration with environment overrides
pub mod config;

/// Validation, target synthesis, and goal projection
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Body profile with automatic target recalculation
pub mod profile;

/// Application constants (re-exported from `meal-planner-core`)
pub mod constants {
    pub use meal_planner_core::constants::*;
}

/// Unified error handling (re-exported from `meal-planner-core`)
pub mod errors {
    pub use meal_planner_core::errors::*;
}

/// Domain models (re-exported from `meal-planner-core`)
pub mod models {
    pub use meal_planner_core::models::*;
}
