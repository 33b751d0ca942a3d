// ABOUTME: Inclusive accepted ranges for body metrics entered by users
// ABOUTME: Used by the metric validator and mirrored in the configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Minimum body weight (kg)
pub const WEIGHT_MIN_KG: f64 = 30.0;
/// Maximum body weight (kg)
pub const WEIGHT_MAX_KG: f64 = 300.0;
/// Minimum height (cm)
pub const HEIGHT_MIN_CM: f64 = 100.0;
/// Maximum height (cm)
pub const HEIGHT_MAX_CM: f64 = 250.0;
/// Minimum age (years)
pub const AGE_MIN_YEARS: u32 = 15;
/// Maximum age (years)
pub const AGE_MAX_YEARS: u32 = 100;
/// Minimum body fat (%)
pub const BODY_FAT_MIN_PERCENT: f64 = 3.0;
/// Maximum body fat (%)
pub const BODY_FAT_MAX_PERCENT: f64 = 60.0;
