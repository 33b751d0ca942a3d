// ABOUTME: Meal planner CLI - validates body metrics and prints nutrition targets as JSON
// ABOUTME: Subcommands for validation, daily targets, goal projection, BMI, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Check metrics against the accepted ranges
//! meal-planner-cli validate --weight 70 --height 170 --age 25 --gender male --body-fat 20
//!
//! # Daily calorie and macro targets (default 500 kcal deficit)
//! meal-planner-cli targets --weight 70 --height 170 --age 25 --gender male --body-fat 20 --activity moderate
//!
//! # Weeks until 13% body fat at 0.45 kg/week
//! meal-planner-cli goal --weight 70 --body-fat 20 --target-body-fat 13 --weekly-loss 0.45
//!
//! # Body Mass Index
//! meal-planner-cli bmi --weight 70 --height 170
//!
//! # Calorie share of each macro
//! meal-planner-cli macros --protein 140 --carbs 234 --fat 61
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use meal_planner::errors::ErrorResponse;
use meal_planner::logging::LoggingConfig;
use meal_planner::models::Gender;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "meal-planner-cli",
    about = "Meal planner nutrition calculator",
    long_about = "Validates body metrics and computes daily calorie and macronutrient targets. Results are printed as JSON on stdout; logs go to stderr."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Body metrics shared by `validate` and `targets`
#[derive(Args, Debug, Clone, Copy)]
struct MetricArgs {
    /// Body weight in kg
    #[arg(long)]
    weight: f64,

    /// Height in cm
    #[arg(long)]
    height: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Gender (male or female)
    #[arg(long)]
    gender: Gender,

    /// Body fat percentage
    #[arg(long)]
    body_fat: f64,
}

#[derive(Subcommand)]
enum Command {
    /// Validate body metrics against the accepted ranges
    Validate {
        #[command(flatten)]
        metrics: MetricArgs,
    },

    /// Compute daily calorie and macronutrient targets
    Targets {
        #[command(flatten)]
        metrics: MetricArgs,

        /// Activity level (sedentary, light, moderate, active, very_active); unknown values count as sedentary
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Daily calorie deficit in kcal (default: 500)
        #[arg(long)]
        deficit: Option<f64>,

        /// Target body fat percentage for the time-to-goal estimate (default: 13)
        #[arg(long)]
        target_body_fat: Option<f64>,
    },

    /// Estimate weeks until a target body fat is reached
    Goal {
        /// Current body weight in kg
        #[arg(long)]
        weight: f64,

        /// Current body fat percentage
        #[arg(long)]
        body_fat: f64,

        /// Target body fat percentage
        #[arg(long)]
        target_body_fat: f64,

        /// Expected weight loss per week in kg
        #[arg(long)]
        weekly_loss: f64,
    },

    /// Compute Body Mass Index
    Bmi {
        /// Body weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,
    },

    /// Show the calorie share of each macronutrient
    Macros {
        /// Protein in grams
        #[arg(long)]
        protein: f64,

        /// Carbohydrates in grams
        #[arg(long)]
        carbs: f64,

        /// Fat in grams
        #[arg(long)]
        fat: f64,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let outcome = match cli.command {
        Command::Validate { metrics } => commands::metrics::validate(&metrics.into()),
        Command::Targets {
            metrics,
            activity,
            deficit,
            target_body_fat,
        } => commands::metrics::targets(&metrics.into(), &activity, deficit, target_body_fat),
        Command::Goal {
            weight,
            body_fat,
            target_body_fat,
            weekly_loss,
        } => commands::goal::weeks_to_goal(weight, body_fat, target_body_fat, weekly_loss),
        Command::Bmi { weight, height } => commands::metrics::bmi(weight, height),
        Command::Macros { protein, carbs, fat } => commands::goal::macros(protein, carbs, fat),
    };

    match outcome {
        Ok(code) => {
            debug!(?code, "Command finished");
            Ok(code)
        }
        Err(error) => {
            warn!(code = ?error.code, "Command failed: {error}");
            helpers::output::print_json(&ErrorResponse::from(error))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
