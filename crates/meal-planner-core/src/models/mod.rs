// ABOUTME: Core data models for the meal planner nutrition engine
// ABOUTME: Re-exports body metrics, activity levels, nutrition targets, and meal log records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are immutable value records: they are created, consumed and
//! discarded within a single calculation. Persistence of the resulting records
//! belongs to the caller.
//!
//! ## Core Models
//!
//! - `MetricInput`: Raw body metrics entered by a user
//! - `ActivityLevel`: Activity category with its fixed TDEE multiplier
//! - `NutritionTargets`: Published BMR/TDEE/calorie/macro targets
//! - `GoalEstimate`: Weeks to reach a body-fat goal, or unattainable
//! - `DailyMealLog`: Meals logged for one day with totals against targets

// Domain modules
mod body;
mod meal;
mod targets;

// Body metrics domain
pub use body::{ActivityLevel, Gender, MetricInput};

// Calculation results
pub use targets::{GoalEstimate, MacroPercentages, NutritionTargets, ValidationResult};

// Meal log domain
pub use meal::{DailyMealLog, MacroProgress, MacroTotals, MealEntry, MealSlot};
