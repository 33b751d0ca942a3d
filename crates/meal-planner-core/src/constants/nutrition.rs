// ABOUTME: Energy density, macro ratio, and Mifflin-St Jeor constants
// ABOUTME: Shared by the calculator defaults and the configuration layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Mifflin-St Jeor weight coefficient (per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient (per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient (per year)
pub const MSJ_AGE_COEF: f64 = -5.0;
/// Mifflin-St Jeor male constant
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor female constant
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Activity multipliers, indexed in `ActivityLevel` declaration order
pub const ACTIVITY_MULTIPLIERS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

/// Default deficit subtracted from TDEE (kcal/day)
pub const DEFAULT_DEFICIT_KCAL: f64 = 500.0;
/// Lowest daily calorie target for men (kcal/day)
pub const MALE_CALORIE_FLOOR: f64 = 1500.0;
/// Lowest daily calorie target for women (kcal/day)
pub const FEMALE_CALORIE_FLOOR: f64 = 1200.0;

/// Protein target per kg of body weight (muscle preservation)
pub const PROTEIN_G_PER_KG: f64 = 2.0;
/// Share of the daily calorie target allocated to fat
pub const FAT_FRACTION: f64 = 0.27;

/// Energy in one gram of protein (kcal)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy in one gram of carbohydrate (kcal)
pub const KCAL_PER_G_CARB: f64 = 4.0;
/// Energy in one gram of fat (kcal)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Energy stored in one kg of body fat (kcal)
pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;
/// Fraction of lost body weight assumed to be fat mass
pub const FAT_LOSS_FRACTION: f64 = 0.7;
/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Target body fat percentage assigned to new profiles
pub const DEFAULT_TARGET_BODY_FAT_PERCENT: f64 = 13.0;
