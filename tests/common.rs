// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides test logging setup and standard body metric inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `meal_planner`

use meal_planner::models::{Gender, MetricInput};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
///
/// Set `TEST_LOG=DEBUG` to see calculator traces.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 170 cm, 25 year old man at 20% body fat
pub fn reference_male() -> MetricInput {
    MetricInput {
        weight_kg: 70.0,
        height_cm: 170.0,
        age: 25,
        gender: Gender::Male,
        body_fat_percent: 20.0,
    }
}

/// Same measurements as [`reference_male`] for a woman at 28% body fat
pub fn reference_female() -> MetricInput {
    MetricInput {
        gender: Gender::Female,
        body_fat_percent: 28.0,
        ..reference_male()
    }
}

/// Assert two floats agree within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
