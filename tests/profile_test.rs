// ABOUTME: Integration tests for body profile creation and partial updates
// ABOUTME: Verifies recalculation triggers, validation rejection, and preserved derived fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, reference_male};
use meal_planner::errors::{ErrorCode, ErrorResponse};
use meal_planner::models::{ActivityLevel, GoalEstimate, MetricInput};
use meal_planner::profile::{BodyProfile, ProfileUpdate};

fn reference_profile() -> BodyProfile {
    BodyProfile::create(reference_male(), ActivityLevel::Moderate, 65.0).unwrap()
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_create_computes_bmi_and_targets() {
    let profile = reference_profile();

    assert_eq!(profile.bmi, 24.2);
    assert_eq!(profile.target_body_fat_percent, 13.0);
    assert_eq!(profile.targets.daily_calorie_target, 2046.0);
    assert_eq!(profile.targets.protein_target_g, 140.0);
    assert_eq!(profile.targets.estimated_time_to_goal, GoalEstimate::Weeks(18));
}

#[test]
fn test_create_rejects_out_of_range_metrics() {
    init_test_logging();
    let input = MetricInput {
        weight_kg: 20.0,
        age: 12,
        ..reference_male()
    };
    let error = BodyProfile::create(input, ActivityLevel::Light, 60.0).unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.http_status(), 400);
    assert_eq!(error.message, "2 metric(s) out of range");
    assert_eq!(
        error.details["errors"],
        serde_json::json!([
            "Weight must be between 30-300 kg",
            "Age must be between 15-100 years"
        ])
    );
}

// ============================================================================
// Updates
// ============================================================================

#[test]
fn test_weight_update_recalculates() {
    let profile = reference_profile();
    let updated = profile
        .apply_update(&ProfileUpdate {
            weight_kg: Some(80.0),
            ..ProfileUpdate::default()
        })
        .unwrap();

    assert_eq!(updated.metrics.weight_kg, 80.0);
    assert_eq!(updated.bmi, 27.7);
    assert_eq!(updated.targets.bmr, 1743.0);
    assert_eq!(updated.targets.daily_calorie_target, 2201.0);
    assert_eq!(updated.targets.protein_target_g, 160.0);
    // untouched fields carry over
    assert_eq!(updated.metrics.height_cm, 170.0);
    assert_eq!(updated.activity_level, ActivityLevel::Moderate);
}

#[test]
fn test_activity_update_applies_calorie_floor() {
    let updated = reference_profile()
        .apply_update(&ProfileUpdate {
            activity_level: Some(ActivityLevel::Sedentary),
            ..ProfileUpdate::default()
        })
        .unwrap();

    // 1642.5 x 1.2 - 500 = 1471, below the 1500 kcal floor for men
    assert_eq!(updated.targets.daily_calorie_target, 1500.0);
}

#[test]
fn test_target_body_fat_update_changes_goal_projection() {
    let updated = reference_profile()
        .apply_update(&ProfileUpdate {
            target_body_fat_percent: Some(10.0),
            ..ProfileUpdate::default()
        })
        .unwrap();

    assert_eq!(updated.target_body_fat_percent, 10.0);
    assert_eq!(updated.targets.estimated_time_to_goal, GoalEstimate::Weeks(25));
}

#[test]
fn test_goal_weight_update_keeps_derived_fields() {
    let profile = reference_profile();
    let updated = profile
        .apply_update(&ProfileUpdate {
            target_weight_kg: Some(62.0),
            ..ProfileUpdate::default()
        })
        .unwrap();

    assert_eq!(updated.target_weight_kg, 62.0);
    assert_eq!(updated.targets, profile.targets);
    assert_eq!(updated.calculated_at, profile.calculated_at);
}

#[test]
fn test_empty_update_is_a_no_op() {
    let profile = reference_profile();
    let updated = profile.apply_update(&ProfileUpdate::default()).unwrap();
    assert_eq!(updated, profile);
}

#[test]
fn test_invalid_update_is_rejected() {
    init_test_logging();
    let profile = reference_profile();
    let error = profile
        .apply_update(&ProfileUpdate {
            height_cm: Some(260.0),
            target_body_fat_percent: Some(75.0),
            ..ProfileUpdate::default()
        })
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(
        error.details["errors"],
        serde_json::json!([
            "Height must be between 100-250 cm",
            "Target body fat must be between 3-60%"
        ])
    );
    assert_eq!(profile.metrics.height_cm, 170.0);
}

#[test]
fn test_rejected_update_serializes_as_error_response() {
    let error = reference_profile()
        .apply_update(&ProfileUpdate {
            age: Some(101),
            ..ProfileUpdate::default()
        })
        .unwrap_err();

    let json = serde_json::to_value(ErrorResponse::from(error)).unwrap();
    assert_eq!(json["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(
        json["error"]["details"]["errors"][0],
        "Age must be between 15-100 years"
    );
}

#[test]
fn test_update_deserializes_from_partial_json() {
    let update: ProfileUpdate =
        serde_json::from_str(r#"{"weight_kg": 68.5, "activity_level": "very_active"}"#).unwrap();

    assert_eq!(update.weight_kg, Some(68.5));
    assert_eq!(update.activity_level, Some(ActivityLevel::VeryActive));
    assert_eq!(update.gender, None);
    assert!(update.requires_recalculation());
}
