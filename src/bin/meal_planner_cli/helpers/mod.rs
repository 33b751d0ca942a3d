// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for meal-planner-cli
// ABOUTME: Provides access to JSON output formatting

pub mod output;
