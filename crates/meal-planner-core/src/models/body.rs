// ABOUTME: Body metric models for nutrition target calculation
// ABOUTME: Gender, ActivityLevel with its fixed multiplier table, and MetricInput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::ACTIVITY_MULTIPLIERS;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Gender for BMR calculations
///
/// Closed two-value enum: the Mifflin-St Jeor constants are only defined for these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant, 1500 kcal floor)
    Male,
    /// Female (-161 kcal constant, 1200 kcal floor)
    Female,
}

impl Gender {
    /// Wire name of this gender
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (x1.2)
    Sedentary,
    /// Exercise 1-3 days/week (x1.375)
    Light,
    /// Exercise 3-5 days/week (x1.55)
    Moderate,
    /// Exercise 6-7 days/week (x1.725)
    Active,
    /// Athlete level (x1.9)
    VeryActive,
}

impl ActivityLevel {
    /// All levels in ascending multiplier order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// TDEE multiplier bound to this level
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        ACTIVITY_MULTIPLIERS[self as usize]
    }

    /// Wire key of this level
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Look up a level by its wire key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_key() == key)
    }

    /// Look up a level by key, falling back to `Sedentary` for unknown keys
    ///
    /// Callers normally send one of the five keys; this keeps TDEE total
    /// against malformed input instead of failing the whole calculation.
    #[must_use]
    pub fn from_key_or_sedentary(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            warn!(
                activity_level = %key,
                fallback = Self::Sedentary.as_key(),
                "Unrecognized activity level, using sedentary multiplier"
            );
            Self::Sedentary
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| {
            AppError::invalid_input(format!("Unknown activity level '{s}'"))
        })
    }
}

/// Raw body metrics as entered by a user
///
/// Values are already parsed; range checks happen in the metric validator
/// before any derived value is trusted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age: u32,
    /// Gender for the BMR constant and calorie floor
    pub gender: Gender,
    /// Body fat (%)
    pub body_fat_percent: f64,
}
