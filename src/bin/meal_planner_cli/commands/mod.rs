// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for meal-planner-cli
// ABOUTME: Provides access to metric, target, and goal commands

pub mod goal;
pub mod metrics;

use crate::MetricArgs;
use meal_planner::models::MetricInput;

impl From<MetricArgs> for MetricInput {
    fn from(args: MetricArgs) -> Self {
        Self {
            weight_kg: args.weight,
            height_cm: args.height,
            age: args.age,
            gender: args.gender,
            body_fat_percent: args.body_fat,
        }
    }
}
