// ABOUTME: Nutrition target calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, BMI, calorie deficit with safety floor, and protein/fat/carb split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Converts a user's body metrics and activity level into daily calorie and
//! macronutrient targets. Every function is pure: identical inputs give
//! bit-identical outputs, and nothing here allocates shared state.
//!
//! Intermediate values stay unrounded; rounding happens only at the steps
//! where a published target is produced (half away from zero).
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology (activity factors)

use super::goal_estimator::estimate_weeks_to_goal_with_config;
use crate::config::{BmrConfig, NutritionConfig, TargetConfig};
use meal_planner_core::constants::nutrition::{
    DAYS_PER_WEEK, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use meal_planner_core::models::{
    ActivityLevel, Gender, MacroPercentages, MetricInput, NutritionTargets,
};
use tracing::debug;

/// Inputs for a full target calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetParams {
    /// Body metrics (expected to have passed validation)
    pub metrics: MetricInput,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Daily deficit in kcal; the configured default (500) when `None`
    pub deficit_kcal: Option<f64>,
    /// Target body fat for the time-to-goal projection; configured default (13%) when `None`
    pub target_body_fat_percent: Option<f64>,
}

/// Calculate Basal Metabolic Rate with the default Mifflin-St Jeor coefficients
///
/// - Men: `10 x weight + 6.25 x height - 5 x age + 5`
/// - Women: `10 x weight + 6.25 x height - 5 x age - 161`
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    calculate_mifflin_st_jeor(weight_kg, height_cm, age, gender, &BmrConfig::default())
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
///
/// The result is left unrounded so later stages do not compound rounding error.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Male or Female
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// - Sedentary: 1.2 (little/no exercise)
/// - Light: 1.375 (1-3 days/week)
/// - Moderate: 1.55 (3-5 days/week)
/// - Active: 1.725 (6-7 days/week)
/// - Very active: 1.9 (athlete level)
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Calculate TDEE from a raw activity key
///
/// Unknown keys use the sedentary multiplier rather than failing.
#[must_use]
pub fn calculate_tdee_for_key(bmr: f64, activity_key: &str) -> f64 {
    calculate_tdee(bmr, ActivityLevel::from_key_or_sedentary(activity_key))
}

/// Calculate Body Mass Index: weight (kg) / height (m)^2
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate daily nutrition targets with the default configuration
///
/// `deficit_kcal` defaults to 500 kcal/day. The time-to-goal projection uses
/// the input's body fat and the default 13% target.
#[must_use]
pub fn compute_nutrition_targets(
    input: &MetricInput,
    activity_level: ActivityLevel,
    deficit_kcal: Option<f64>,
) -> NutritionTargets {
    calculate_nutrition_targets(
        &TargetParams {
            metrics: *input,
            activity_level,
            deficit_kcal,
            target_body_fat_percent: None,
        },
        &NutritionConfig::default(),
    )
}

/// Calculate complete daily nutrition targets
///
/// Order matters:
/// 1. BMR, then TDEE
/// 2. Daily target = TDEE - deficit, then raised to the gender calorie floor
/// 3. Protein from body weight (independent of the calorie target)
/// 4. Fat as a fixed share of the floored daily target
/// 5. Carbs take the remaining calories; may be negative at extreme inputs
/// 6. Weekly loss from the deficit at 7700 kcal/kg, two decimals
///
/// # Arguments
/// * `params` - Metrics, activity level, optional deficit and target body fat
/// * `config` - Nutrition configuration
#[must_use]
pub fn calculate_nutrition_targets(
    params: &TargetParams,
    config: &NutritionConfig,
) -> NutritionTargets {
    let metrics = &params.metrics;
    let targets = &config.targets;
    let deficit = params.deficit_kcal.unwrap_or(targets.default_deficit_kcal);

    let bmr = calculate_mifflin_st_jeor(
        metrics.weight_kg,
        metrics.height_cm,
        metrics.age,
        metrics.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, params.activity_level);

    let daily_calorie_target = apply_calorie_floor(tdee - deficit, metrics.gender, targets);

    let protein_g = (metrics.weight_kg * targets.protein_g_per_kg).round();
    let fat_g = (daily_calorie_target * targets.fat_fraction / KCAL_PER_G_FAT).round();
    let carbs_g = ((daily_calorie_target
        - protein_g.mul_add(KCAL_PER_G_PROTEIN, fat_g * KCAL_PER_G_FAT))
        / KCAL_PER_G_CARB)
        .round();

    let weekly_loss_kg = round_to_hundredths(deficit * DAYS_PER_WEEK / targets.kcal_per_kg_body_fat);

    let target_body_fat = params
        .target_body_fat_percent
        .unwrap_or(targets.default_target_body_fat_percent);
    let time_to_goal = estimate_weeks_to_goal_with_config(
        metrics.weight_kg,
        metrics.body_fat_percent,
        target_body_fat,
        weekly_loss_kg,
        targets,
    );

    debug!(
        bmr,
        tdee,
        deficit,
        daily_calorie_target,
        protein_g,
        fat_g,
        carbs_g,
        activity_level = %params.activity_level,
        "Computed nutrition targets"
    );

    NutritionTargets {
        bmr: bmr.round(),
        tdee: tdee.round(),
        daily_calorie_target: daily_calorie_target.round(),
        protein_target_g: protein_g,
        carb_target_g: carbs_g,
        fat_target_g: fat_g,
        estimated_weekly_weight_loss_kg: weekly_loss_kg,
        estimated_time_to_goal: time_to_goal,
    }
}

/// Calculate the share of calories each macro contributes
///
/// Percentages are rounded to whole numbers. All zero when the macros carry no calories.
#[must_use]
pub fn calculate_macro_percentages(protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroPercentages {
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;
    let carb_kcal = carbs_g * KCAL_PER_G_CARB;
    let fat_kcal = fat_g * KCAL_PER_G_FAT;
    let total_kcal = protein_kcal + carb_kcal + fat_kcal;

    if total_kcal.abs() < f64::EPSILON {
        return MacroPercentages {
            protein_percent: 0.0,
            carb_percent: 0.0,
            fat_percent: 0.0,
        };
    }

    MacroPercentages {
        protein_percent: (protein_kcal * 100.0 / total_kcal).round(),
        carb_percent: (carb_kcal * 100.0 / total_kcal).round(),
        fat_percent: (fat_kcal * 100.0 / total_kcal).round(),
    }
}

// Applied after the deficit so no deficit can push the target below the floor
fn apply_calorie_floor(daily_calorie_target: f64, gender: Gender, config: &TargetConfig) -> f64 {
    let floor = match gender {
        Gender::Male => config.male_calorie_floor,
        Gender::Female => config.female_calorie_floor,
    };
    daily_calorie_target.max(floor)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
