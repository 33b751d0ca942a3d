// ABOUTME: Integration tests for body metric range validation
// ABOUTME: Covers inclusive boundaries, message text, ordering, and non-finite values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::reference_male;
use meal_planner::config::MetricRangesConfig;
use meal_planner::intelligence::{
    validate_body_fat, validate_metrics, validate_metrics_with_ranges, validate_target_body_fat,
};
use meal_planner::models::{Gender, MetricInput};

const WEIGHT_MESSAGE: &str = "Weight must be between 30-300 kg";
const HEIGHT_MESSAGE: &str = "Height must be between 100-250 cm";
const AGE_MESSAGE: &str = "Age must be between 15-100 years";
const BODY_FAT_MESSAGE: &str = "Body fat must be between 3-60%";

fn with_weight(weight_kg: f64) -> MetricInput {
    MetricInput {
        weight_kg,
        ..reference_male()
    }
}

#[test]
fn test_reference_metrics_are_valid() {
    let result = validate_metrics(&reference_male());
    assert!(result.valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_weight_bounds_are_inclusive() {
    assert!(validate_metrics(&with_weight(30.0)).valid);
    assert!(validate_metrics(&with_weight(300.0)).valid);

    let below = validate_metrics(&with_weight(29.999));
    assert!(!below.valid);
    assert_eq!(below.errors, vec![WEIGHT_MESSAGE]);

    let above = validate_metrics(&with_weight(300.001));
    assert_eq!(above.errors, vec![WEIGHT_MESSAGE]);
}

#[test]
fn test_height_out_of_range() {
    for height_cm in [99.9, 250.5] {
        let result = validate_metrics(&MetricInput {
            height_cm,
            ..reference_male()
        });
        assert_eq!(result.errors, vec![HEIGHT_MESSAGE]);
    }
    assert!(validate_metrics(&MetricInput {
        height_cm: 250.0,
        ..reference_male()
    })
    .valid);
}

#[test]
fn test_age_bounds() {
    for (age, valid) in [(14, false), (15, true), (100, true), (101, false)] {
        let result = validate_metrics(&MetricInput {
            age,
            ..reference_male()
        });
        assert_eq!(result.valid, valid, "age {age}");
        if !valid {
            assert_eq!(result.errors, vec![AGE_MESSAGE]);
        }
    }
}

#[test]
fn test_body_fat_bounds() {
    for (body_fat_percent, valid) in [(2.9, false), (3.0, true), (60.0, true), (60.1, false)] {
        let result = validate_metrics(&MetricInput {
            body_fat_percent,
            ..reference_male()
        });
        assert_eq!(result.valid, valid, "body fat {body_fat_percent}");
        if !valid {
            assert_eq!(result.errors, vec![BODY_FAT_MESSAGE]);
        }
    }
}

#[test]
fn test_all_violations_reported_in_field_order() {
    let input = MetricInput {
        weight_kg: 10.0,
        height_cm: 50.0,
        age: 10,
        gender: Gender::Female,
        body_fat_percent: 70.0,
    };
    let result = validate_metrics(&input);

    assert!(!result.valid);
    assert_eq!(
        result.errors,
        vec![WEIGHT_MESSAGE, HEIGHT_MESSAGE, AGE_MESSAGE, BODY_FAT_MESSAGE]
    );
}

#[test]
fn test_non_finite_values_are_invalid() {
    assert_eq!(
        validate_metrics(&with_weight(f64::NAN)).errors,
        vec![WEIGHT_MESSAGE]
    );
    let result = validate_metrics(&MetricInput {
        height_cm: f64::INFINITY,
        body_fat_percent: f64::NAN,
        ..reference_male()
    });
    assert_eq!(result.errors, vec![HEIGHT_MESSAGE, BODY_FAT_MESSAGE]);
}

#[test]
fn test_custom_ranges_render_in_messages() {
    let ranges = MetricRangesConfig {
        weight_min_kg: 40.0,
        weight_max_kg: 180.5,
        ..MetricRangesConfig::default()
    };
    let result = validate_metrics_with_ranges(&with_weight(35.0), &ranges);
    assert_eq!(result.errors, vec!["Weight must be between 40-180.5 kg"]);
}

#[test]
fn test_target_body_fat_check() {
    let ranges = MetricRangesConfig::default();
    assert_eq!(validate_target_body_fat(13.0, &ranges), None);
    assert_eq!(
        validate_target_body_fat(1.0, &ranges).as_deref(),
        Some("Target body fat must be between 3-60%")
    );
}

#[test]
fn test_current_body_fat_check() {
    let ranges = MetricRangesConfig::default();
    assert_eq!(validate_body_fat(20.0, &ranges), None);
    assert_eq!(
        validate_body_fat(150.0, &ranges).as_deref(),
        Some(BODY_FAT_MESSAGE)
    );
    assert_eq!(
        validate_body_fat(f64::NAN, &ranges).as_deref(),
        Some(BODY_FAT_MESSAGE)
    );
}
