// ABOUTME: Configuration management module for the nutrition calculator
// ABOUTME: Exposes typed configuration with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Nutrition**: BMR coefficients, target synthesis settings, metric ranges
//! - **Error**: Configuration loading and validation errors

/// Configuration error types
pub mod error;
/// Nutrition calculator configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{BmrConfig, MetricRangesConfig, NutritionConfig, TargetConfig};
