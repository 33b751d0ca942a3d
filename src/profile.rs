// ABOUTME: Body profile that keeps BMI and nutrition targets in step with its metrics
// ABOUTME: Partial updates are validated and trigger recalculation only when inputs change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    calculate_bmi, calculate_nutrition_targets, validate_metrics_with_ranges,
    validate_target_body_fat, TargetParams,
};
use crate::models::{ActivityLevel, Gender, MetricInput, NutritionTargets};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A user's body metrics with their derived BMI and daily targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Current body metrics
    pub metrics: MetricInput,
    /// Activity level used for TDEE
    pub activity_level: ActivityLevel,
    /// Goal weight in kilograms (informational, does not affect targets)
    pub target_weight_kg: f64,
    /// Goal body fat percentage used for the time-to-goal projection
    pub target_body_fat_percent: f64,
    /// Body Mass Index derived from weight and height
    pub bmi: f64,
    /// Derived daily targets
    pub targets: NutritionTargets,
    /// When the derived fields were last computed
    pub calculated_at: DateTime<Utc>,
}

/// Partial profile update; `None` fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    /// New weight (kg)
    pub weight_kg: Option<f64>,
    /// New height (cm)
    pub height_cm: Option<f64>,
    /// New age (years)
    pub age: Option<u32>,
    /// New gender
    pub gender: Option<Gender>,
    /// New body fat (%)
    pub body_fat_percent: Option<f64>,
    /// New activity level
    pub activity_level: Option<ActivityLevel>,
    /// New goal weight (kg)
    pub target_weight_kg: Option<f64>,
    /// New goal body fat (%)
    pub target_body_fat_percent: Option<f64>,
}

impl ProfileUpdate {
    /// Whether the update touches a field that BMI or the targets depend on
    #[must_use]
    pub const fn requires_recalculation(&self) -> bool {
        self.weight_kg.is_some()
            || self.height_cm.is_some()
            || self.age.is_some()
            || self.gender.is_some()
            || self.body_fat_percent.is_some()
            || self.activity_level.is_some()
            || self.target_body_fat_percent.is_some()
    }
}

impl BodyProfile {
    /// Create a profile with the default configuration
    ///
    /// Target body fat starts at the configured default (13%).
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` listing every metric outside its accepted range
    pub fn create(
        metrics: MetricInput,
        activity_level: ActivityLevel,
        target_weight_kg: f64,
    ) -> AppResult<Self> {
        let config = NutritionConfig::default();
        let target_body_fat_percent = config.targets.default_target_body_fat_percent;
        Self::create_with_config(
            metrics,
            activity_level,
            target_weight_kg,
            target_body_fat_percent,
            &config,
        )
    }

    /// Create a profile with an explicit target body fat and configuration
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` listing every metric outside its accepted range
    pub fn create_with_config(
        metrics: MetricInput,
        activity_level: ActivityLevel,
        target_weight_kg: f64,
        target_body_fat_percent: f64,
        config: &NutritionConfig,
    ) -> AppResult<Self> {
        check_metrics(&metrics, target_body_fat_percent, config)?;
        Ok(Self::derive(
            metrics,
            activity_level,
            target_weight_kg,
            target_body_fat_percent,
            config,
        ))
    }

    /// Apply a partial update with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the merged metrics are invalid; `self` is untouched
    pub fn apply_update(&self, update: &ProfileUpdate) -> AppResult<Self> {
        self.apply_update_with_config(update, &NutritionConfig::default())
    }

    /// Apply a partial update
    ///
    /// The merged profile is validated before anything is recomputed. BMI and
    /// targets are recomputed only when the update touches one of their inputs;
    /// a goal-weight-only update keeps the existing derived fields.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the merged metrics are invalid; `self` is untouched
    pub fn apply_update_with_config(
        &self,
        update: &ProfileUpdate,
        config: &NutritionConfig,
    ) -> AppResult<Self> {
        let metrics = MetricInput {
            weight_kg: update.weight_kg.unwrap_or(self.metrics.weight_kg),
            height_cm: update.height_cm.unwrap_or(self.metrics.height_cm),
            age: update.age.unwrap_or(self.metrics.age),
            gender: update.gender.unwrap_or(self.metrics.gender),
            body_fat_percent: update
                .body_fat_percent
                .unwrap_or(self.metrics.body_fat_percent),
        };
        let activity_level = update.activity_level.unwrap_or(self.activity_level);
        let target_weight_kg = update.target_weight_kg.unwrap_or(self.target_weight_kg);
        let target_body_fat_percent = update
            .target_body_fat_percent
            .unwrap_or(self.target_body_fat_percent);

        check_metrics(&metrics, target_body_fat_percent, config).inspect_err(|e| {
            warn!(details = %e.details, "Rejected profile update");
        })?;

        if !update.requires_recalculation() {
            debug!("Profile update does not affect targets, keeping derived fields");
            return Ok(Self {
                target_weight_kg,
                ..self.clone()
            });
        }

        Ok(Self::derive(
            metrics,
            activity_level,
            target_weight_kg,
            target_body_fat_percent,
            config,
        ))
    }

    fn derive(
        metrics: MetricInput,
        activity_level: ActivityLevel,
        target_weight_kg: f64,
        target_body_fat_percent: f64,
        config: &NutritionConfig,
    ) -> Self {
        let targets = calculate_nutrition_targets(
            &TargetParams {
                metrics,
                activity_level,
                deficit_kcal: None,
                target_body_fat_percent: Some(target_body_fat_percent),
            },
            config,
        );
        let bmi = round_to_tenths(calculate_bmi(metrics.weight_kg, metrics.height_cm));
        debug!(bmi, daily_calorie_target = targets.daily_calorie_target, "Recalculated profile");

        Self {
            metrics,
            activity_level,
            target_weight_kg,
            target_body_fat_percent,
            bmi,
            targets,
            calculated_at: Utc::now(),
        }
    }
}

fn check_metrics(
    metrics: &MetricInput,
    target_body_fat_percent: f64,
    config: &NutritionConfig,
) -> AppResult<()> {
    let mut result = validate_metrics_with_ranges(metrics, &config.metric_ranges);
    if let Some(message) = validate_target_body_fat(target_body_fat_percent, &config.metric_ranges)
    {
        result.errors.push(message);
    }

    if result.errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::metrics_out_of_range(&result.errors))
    }
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn bmi_keeps_one_decimal() {
        assert_eq!(round_to_tenths(24.221_453), 24.2);
        assert_eq!(round_to_tenths(24.25), 24.3);
    }

    #[test]
    fn goal_weight_alone_does_not_recalculate() {
        let update = ProfileUpdate {
            target_weight_kg: Some(65.0),
            ..ProfileUpdate::default()
        };
        assert!(!update.requires_recalculation());

        let update = ProfileUpdate {
            target_body_fat_percent: Some(15.0),
            ..ProfileUpdate::default()
        };
        assert!(update.requires_recalculation());
    }
}
