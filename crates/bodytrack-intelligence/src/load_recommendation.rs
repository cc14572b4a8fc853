// ABOUTME: Starting-load recommendation for a new exercise from a student profile
// ABOUTME: Base ratio of body weight, experience multiplier, then body fat reduction, rounded to whole kg
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Load Recommendation
//!
//! A heuristic, not a prescription. Order of operations is fixed:
//!
//! 1. `base = weight * 0.5`
//! 2. `base *= 1.2` (intermediate) or `1.5` (advanced)
//! 3. `base *= 0.8` when body fat is strictly above 25%
//! 4. round to the nearest whole kilogram

use crate::config::LoadRecommendationConfig;
use bodytrack_core::errors::{AppError, AppResult};
use bodytrack_core::models::{ExperienceTier, StudentProfile};
use serde::{Deserialize, Serialize};

/// Suggested starting load for an exercise entry (not persisted)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExerciseLoadSuggestion {
    /// Whole-kilogram starting load
    pub suggested_load_kg: f64,
}

impl ExerciseLoadSuggestion {
    /// Suggestion for a profile's current weight and tier
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile weight is not positive
    pub fn for_profile(
        profile: &StudentProfile,
        body_fat_percent: f64,
        config: &LoadRecommendationConfig,
    ) -> AppResult<Self> {
        let suggested_load_kg = suggest_load_kg(
            profile.weight_kg,
            profile.experience_tier,
            body_fat_percent,
            config,
        )?;
        Ok(Self { suggested_load_kg })
    }
}

/// Suggested starting load in kilograms
///
/// The experience multiplier is applied before the body fat reduction.
///
/// # Errors
///
/// Returns `InvalidInput` if `weight_kg` is not positive
pub fn suggest_load_kg(
    weight_kg: f64,
    tier: ExperienceTier,
    body_fat_percent: f64,
    config: &LoadRecommendationConfig,
) -> AppResult<f64> {
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be positive, got {weight_kg}"
        )));
    }

    let mut load = weight_kg * config.base_body_weight_ratio;
    load *= config.tier_multiplier(tier);
    if body_fat_percent > config.high_body_fat_threshold_percent {
        load *= config.high_body_fat_factor;
    }

    Ok(load.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let config = LoadRecommendationConfig::default();
        let at = suggest_load_kg(100.0, ExperienceTier::Beginner, 25.0, &config).unwrap();
        let above = suggest_load_kg(100.0, ExperienceTier::Beginner, 25.01, &config).unwrap();
        assert!((at - 50.0).abs() < f64::EPSILON);
        assert!((above - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advanced_multiplier() {
        let config = LoadRecommendationConfig::default();
        let load = suggest_load_kg(80.0, ExperienceTier::Advanced, 15.0, &config).unwrap();
        assert!((load - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_nan_weight() {
        let config = LoadRecommendationConfig::default();
        assert!(suggest_load_kg(f64::NAN, ExperienceTier::Beginner, 20.0, &config).is_err());
    }
}
