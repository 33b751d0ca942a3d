// ABOUTME: Range validation for user-entered body metrics
// ABOUTME: Reports every out-of-range field in a fixed order instead of failing fast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric validation
//!
//! Runs before any estimator. The validator is total: it never errors, it
//! returns a [`ValidationResult`] whose `errors` list one message per violated
//! field in the order weight, height, age, body fat. Bounds are inclusive and
//! non-finite values are always out of range.

use crate::config::MetricRangesConfig;
use meal_planner_core::models::{MetricInput, ValidationResult};
use std::ops::RangeInclusive;

/// Validate metrics against the default accepted ranges
#[must_use]
pub fn validate_metrics(input: &MetricInput) -> ValidationResult {
    validate_metrics_with_ranges(input, &MetricRangesConfig::default())
}

/// Validate metrics against explicit ranges
#[must_use]
pub fn validate_metrics_with_ranges(
    input: &MetricInput,
    ranges: &MetricRangesConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if !within(input.weight_kg, ranges.weight_min_kg..=ranges.weight_max_kg) {
        errors.push(weight_message(ranges));
    }
    if !within(input.height_cm, ranges.height_min_cm..=ranges.height_max_cm) {
        errors.push(height_message(ranges));
    }
    if !(ranges.age_min_years..=ranges.age_max_years).contains(&input.age) {
        errors.push(age_message(ranges));
    }
    if let Some(message) = validate_body_fat(input.body_fat_percent, ranges) {
        errors.push(message);
    }

    ValidationResult::from_errors(errors)
}

/// Check a current body fat percentage against the body fat range
///
/// Returns the violation message, if any.
#[must_use]
pub fn validate_body_fat(body_fat_percent: f64, ranges: &MetricRangesConfig) -> Option<String> {
    (!within(
        body_fat_percent,
        ranges.body_fat_min_percent..=ranges.body_fat_max_percent,
    ))
    .then(|| body_fat_message("Body fat", ranges))
}

/// Check a target body fat percentage against the body fat range
///
/// Returns the violation message, if any.
#[must_use]
pub fn validate_target_body_fat(
    target_body_fat_percent: f64,
    ranges: &MetricRangesConfig,
) -> Option<String> {
    (!within(
        target_body_fat_percent,
        ranges.body_fat_min_percent..=ranges.body_fat_max_percent,
    ))
    .then(|| body_fat_message("Target body fat", ranges))
}

fn within(value: f64, range: RangeInclusive<f64>) -> bool {
    value.is_finite() && range.contains(&value)
}

fn weight_message(ranges: &MetricRangesConfig) -> String {
    format!(
        "Weight must be between {}-{} kg",
        ranges.weight_min_kg, ranges.weight_max_kg
    )
}

fn height_message(ranges: &MetricRangesConfig) -> String {
    format!(
        "Height must be between {}-{} cm",
        ranges.height_min_cm, ranges.height_max_cm
    )
}

fn age_message(ranges: &MetricRangesConfig) -> String {
    format!(
        "Age must be between {}-{} years",
        ranges.age_min_years, ranges.age_max_years
    )
}

fn body_fat_message(label: &str, ranges: &MetricRangesConfig) -> String {
    format!(
        "{label} must be between {}-{}%",
        ranges.body_fat_min_percent, ranges.body_fat_max_percent
    )
}
