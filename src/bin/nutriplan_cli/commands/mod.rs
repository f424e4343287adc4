// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides metrics, plan, analyze and totals commands

pub mod analyze;
pub mod metrics;
pub mod plan;
pub mod totals;
