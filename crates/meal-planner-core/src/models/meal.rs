// ABOUTME: Daily meal log models for tracking intake against nutrition targets
// ABOUTME: MealSlot, MealEntry, DailyMealLog with totals and per-macro progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::targets::NutritionTargets;
use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Meal slot within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Snack between lunch and dinner
    Snack,
    /// Dinner meal
    Dinner,
}

impl FromStr for MealSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            other => Err(AppError::invalid_input(format!("Unknown meal slot '{other}'"))),
        }
    }
}

/// A recipe logged into one meal slot
///
/// Nutrition values are for the whole entry (already multiplied by `servings`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Recipe identifier in the static catalog
    pub recipe_id: String,
    /// Recipe name (English)
    pub recipe_name_en: String,
    /// Recipe name (Telugu)
    pub recipe_name_te: String,
    /// Number of servings eaten
    pub servings: f64,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// When the entry was logged
    pub logged_at: DateTime<Utc>,
}

/// Summed calories and macros
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MacroTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl MacroTotals {
    fn add(mut self, entry: &MealEntry) -> Self {
        self.calories += entry.calories;
        self.protein_g += entry.protein_g;
        self.carbs_g += entry.carbs_g;
        self.fat_g += entry.fat_g;
        self
    }
}

/// Intake for one day compared with the targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroProgress {
    /// What was eaten
    pub consumed: MacroTotals,
    /// Target minus consumed; negative once a target is exceeded
    pub remaining: MacroTotals,
    /// Consumed as a percentage of each target (0 when the target is not positive)
    pub percent_of_target: MacroTotals,
}

/// Meals logged for a single date, at most one entry per slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DailyMealLog {
    /// Calendar day of the log
    pub date: NaiveDate,
    /// Breakfast entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealEntry>,
    /// Lunch entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealEntry>,
    /// Snack entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snack: Option<MealEntry>,
    /// Dinner entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealEntry>,
    /// Day closed by the user
    pub completed: bool,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyMealLog {
    /// Empty log for a date
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Put an entry into a slot, returning the entry it replaced
    pub fn log(&mut self, slot: MealSlot, entry: MealEntry) -> Option<MealEntry> {
        self.slot_mut(slot).replace(entry)
    }

    /// Remove the entry from a slot
    pub fn clear(&mut self, slot: MealSlot) -> Option<MealEntry> {
        self.slot_mut(slot).take()
    }

    /// Entry logged in a slot
    #[must_use]
    pub const fn entry(&self, slot: MealSlot) -> Option<&MealEntry> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Snack => self.snack.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<MealEntry> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snack => &mut self.snack,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Entries in serving order (breakfast, lunch, snack, dinner)
    pub fn entries(&self) -> impl Iterator<Item = &MealEntry> {
        [&self.breakfast, &self.lunch, &self.snack, &self.dinner]
            .into_iter()
            .flatten()
    }

    /// Sum of all logged entries
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.entries().fold(MacroTotals::default(), MacroTotals::add)
    }

    /// Compare the day's totals with published targets
    #[must_use]
    pub fn progress(&self, targets: &NutritionTargets) -> MacroProgress {
        let consumed = self.totals();
        let target = MacroTotals {
            calories: targets.daily_calorie_target,
            protein_g: targets.protein_target_g,
            carbs_g: targets.carb_target_g,
            fat_g: targets.fat_target_g,
        };

        MacroProgress {
            consumed,
            remaining: MacroTotals {
                calories: target.calories - consumed.calories,
                protein_g: target.protein_g - consumed.protein_g,
                carbs_g: target.carbs_g - consumed.carbs_g,
                fat_g: target.fat_g - consumed.fat_g,
            },
            percent_of_target: MacroTotals {
                calories: percent_of(consumed.calories, target.calories),
                protein_g: percent_of(consumed.protein_g, target.protein_g),
                carbs_g: percent_of(consumed.carbs_g, target.carbs_g),
                fat_g: percent_of(consumed.fat_g, target.fat_g),
            },
        }
    }
}

fn percent_of(value: f64, target: f64) -> f64 {
    if target > 0.0 {
        value / target * 100.0
    } else {
        0.0
    }
}
