// ABOUTME: Body composition, training load, and evolution calculators for bodytrack
// ABOUTME: Pure synchronous functions over bodytrack-core models with configurable coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bodytrack Intelligence
//!
//! Calculators that turn raw assessment data into presentation values:
//!
//! - **`body_composition`**: BMI, Jackson & Pollock body fat, lean and fat mass
//! - **`load_recommendation`**: starting-load heuristic for new exercises
//! - **`evolution`**: directional trends across a student's assessment history
//! - **`display`**: rounding at the presentation boundary
//! - **`config`**: coefficients and heuristic factors with environment overrides
//!
//! None of these functions perform I/O or hold shared mutable state.

/// Configuration for formulas, heuristics and display precision
pub mod config;

/// BMI, skinfold body fat, and mass partition
pub mod body_composition;

/// Starting-load recommendation
pub mod load_recommendation;

/// Adjacent-assessment trend analysis
pub mod evolution;

/// Presentation rounding
pub mod display;

pub use body_composition::{
    bmi, body_density, body_fat_percent, classify_bmi, default_body_fat_percent, derive_metrics,
    lean_and_fat_mass_kg, BmiCategory, BodyFatEstimate, BodyFatSource, DerivedMetrics,
    MassPartition,
};
pub use config::IntelligenceConfig;
pub use display::round_to;
pub use evolution::{
    trend_series, EvolutionMetric, EvolutionSummary, TrendDirection, TrendPoint,
};
pub use load_recommendation::{suggest_load_kg, ExerciseLoadSuggestion};
