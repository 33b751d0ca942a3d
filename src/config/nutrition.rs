// ABOUTME: Nutrition configuration for BMR coefficients, target synthesis, and metric ranges
// ABOUTME: Defaults mirror the calculator constants; env overrides are validated on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Configuration
//!
//! Provides configuration for BMR calculation, daily target synthesis, and the
//! accepted ranges for user-entered body metrics.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Energy density of body fat: Wishnofsky (1958), 3500 kcal/lb (~7700 kcal/kg)

use super::error::ConfigError;
use meal_planner_core::constants::{env_config, nutrition, ranges};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Daily target synthesis and goal projection settings
    pub targets: TargetConfig,
    /// Accepted ranges for user-entered metrics
    pub metric_ranges: MetricRangesConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Daily target synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetConfig {
    /// Deficit subtracted from TDEE when the caller does not supply one (kcal/day)
    pub default_deficit_kcal: f64,
    /// Lowest daily calorie target for men (kcal/day)
    pub male_calorie_floor: f64,
    /// Lowest daily calorie target for women (kcal/day)
    pub female_calorie_floor: f64,
    /// Protein per kg body weight (g/kg)
    pub protein_g_per_kg: f64,
    /// Share of the daily calorie target given to fat (0.0-1.0)
    pub fat_fraction: f64,
    /// Energy stored per kg of body fat (kcal/kg)
    pub kcal_per_kg_body_fat: f64,
    /// Share of lost weight assumed to be fat (0.0-1.0)
    pub fat_loss_fraction: f64,
    /// Target body fat used when the caller has none (%)
    pub default_target_body_fat_percent: f64,
}

/// Inclusive accepted ranges for user-entered metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRangesConfig {
    /// Minimum body weight (kg)
    pub weight_min_kg: f64,
    /// Maximum body weight (kg)
    pub weight_max_kg: f64,
    /// Minimum height (cm)
    pub height_min_cm: f64,
    /// Maximum height (cm)
    pub height_max_cm: f64,
    /// Minimum age (years)
    pub age_min_years: u32,
    /// Maximum age (years)
    pub age_max_years: u32,
    /// Minimum body fat (%)
    pub body_fat_min_percent: f64,
    /// Maximum body fat (%)
    pub body_fat_max_percent: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: nutrition::MSJ_WEIGHT_COEF,
            msj_height_coef: nutrition::MSJ_HEIGHT_COEF,
            msj_age_coef: nutrition::MSJ_AGE_COEF,
            msj_male_constant: nutrition::MSJ_MALE_CONSTANT,
            msj_female_constant: nutrition::MSJ_FEMALE_CONSTANT,
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            default_deficit_kcal: nutrition::DEFAULT_DEFICIT_KCAL,
            male_calorie_floor: nutrition::MALE_CALORIE_FLOOR,
            female_calorie_floor: nutrition::FEMALE_CALORIE_FLOOR,
            protein_g_per_kg: nutrition::PROTEIN_G_PER_KG,
            fat_fraction: nutrition::FAT_FRACTION,
            kcal_per_kg_body_fat: nutrition::KCAL_PER_KG_BODY_FAT,
            fat_loss_fraction: nutrition::FAT_LOSS_FRACTION,
            default_target_body_fat_percent: nutrition::DEFAULT_TARGET_BODY_FAT_PERCENT,
        }
    }
}

impl Default for MetricRangesConfig {
    fn default() -> Self {
        Self {
            weight_min_kg: ranges::WEIGHT_MIN_KG,
            weight_max_kg: ranges::WEIGHT_MAX_KG,
            height_min_cm: ranges::HEIGHT_MIN_CM,
            height_max_cm: ranges::HEIGHT_MAX_CM,
            age_min_years: ranges::AGE_MIN_YEARS,
            age_max_years: ranges::AGE_MAX_YEARS,
            body_fat_min_percent: ranges::BODY_FAT_MIN_PERCENT,
            body_fat_max_percent: ranges::BODY_FAT_MAX_PERCENT,
        }
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; falls back to defaults when the
    /// environment holds invalid overrides.
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::DEFAULT_DEFICIT,
            &mut self.targets.default_deficit_kcal,
        )?;
        Self::apply_env_var(
            env_config::MALE_CALORIE_FLOOR,
            &mut self.targets.male_calorie_floor,
        )?;
        Self::apply_env_var(
            env_config::FEMALE_CALORIE_FLOOR,
            &mut self.targets.female_calorie_floor,
        )?;
        Self::apply_env_var(
            env_config::PROTEIN_G_PER_KG,
            &mut self.targets.protein_g_per_kg,
        )?;
        Self::apply_env_var(env_config::FAT_FRACTION, &mut self.targets.fat_fraction)?;
        Self::apply_env_var(
            env_config::DEFAULT_TARGET_BODY_FAT,
            &mut self.targets.default_target_body_fat_percent,
        )?;
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(is_positive(self.bmr.msj_weight_coef) && is_positive(self.bmr.msj_height_coef)) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        self.targets.validate()?;
        self.metric_ranges.validate()
    }
}

impl TargetConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(is_positive(self.male_calorie_floor) && is_positive(self.female_calorie_floor)) {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie floors must be positive",
            ));
        }
        if !(self.default_deficit_kcal.is_finite() && self.default_deficit_kcal >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Default deficit must be a non-negative number of kcal",
            ));
        }
        if !(0.5..=3.0).contains(&self.protein_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein ratio must be between 0.5 and 3.0 g/kg",
            ));
        }
        if !(self.fat_fraction > 0.0 && self.fat_fraction < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat fraction must be between 0.0 and 1.0 (exclusive)",
            ));
        }
        if !is_positive(self.kcal_per_kg_body_fat) {
            return Err(ConfigError::ValueOutOfRange(
                "Energy per kg of body fat must be positive",
            ));
        }
        if !(self.fat_loss_fraction > 0.0 && self.fat_loss_fraction <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat loss fraction must be in (0.0, 1.0]",
            ));
        }
        if !(self.default_target_body_fat_percent > 0.0
            && self.default_target_body_fat_percent < 100.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Default target body fat must be between 0 and 100 percent (exclusive)",
            ));
        }
        Ok(())
    }
}

// Rejects NaN and infinities
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_ordered(min: f64, max: f64) -> bool {
    min.is_finite() && max.is_finite() && min < max
}

impl MetricRangesConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !is_ordered(self.weight_min_kg, self.weight_max_kg) {
            return Err(ConfigError::InvalidRange("weight_min_kg must be < weight_max_kg"));
        }
        if !is_ordered(self.height_min_cm, self.height_max_cm) {
            return Err(ConfigError::InvalidRange("height_min_cm must be < height_max_cm"));
        }
        if self.age_min_years >= self.age_max_years {
            return Err(ConfigError::InvalidRange("age_min_years must be < age_max_years"));
        }
        if !is_ordered(self.body_fat_min_percent, self.body_fat_max_percent) {
            return Err(ConfigError::InvalidRange(
                "body_fat_min_percent must be < body_fat_max_percent",
            ));
        }
        Ok(())
    }
}
