// ABOUTME: Core types and constants for the meal planner nutrition engine
// ABOUTME: Foundation crate with error handling, calculator constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Planner Core
//!
//! Foundation crate providing shared types and constants for the meal planner
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Calculator constants (formula coefficients, ranges, floors)
//! - **models**: Body metrics, activity levels, nutrition targets, and meal log records

/// Unified error handling system with standard error codes
pub mod errors;

/// Calculator constants organized by domain
pub mod constants;

/// Core data models (metrics, targets, meal log)
pub mod models;
