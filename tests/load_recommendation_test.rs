// ABOUTME: Tests for the starting-load heuristic and experience tier parsing
// ABOUTME: Reproduces the adopted numeric outcomes including order of operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bodytrack::errors::ErrorCode;
use bodytrack::intelligence::config::LoadRecommendationConfig;
use bodytrack::intelligence::load_recommendation::{suggest_load_kg, ExerciseLoadSuggestion};
use bodytrack::models::ExperienceTier;
use common::male_profile;

fn suggest(weight: f64, tier: &str, body_fat: f64) -> f64 {
    let tier: ExperienceTier = tier.parse().unwrap();
    suggest_load_kg(weight, tier, body_fat, &LoadRecommendationConfig::default()).unwrap()
}

#[test]
fn test_intermediate_with_high_body_fat() {
    // 40 -> x1.2 = 48 -> x0.8 = 38.4 -> 38
    assert!((suggest(80.0, "intermediate", 30.0) - 38.0).abs() < f64::EPSILON);
}

#[test]
fn test_beginner_without_adjustments() {
    assert!((suggest(80.0, "beginner", 20.0) - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_advanced_with_high_body_fat() {
    // 50 -> x1.5 = 75 -> x0.8 = 60
    assert!((suggest(100.0, "advanced", 26.0) - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_rounds_to_nearest_whole_kilogram() {
    // 63 * 0.5 * 1.2 = 37.8 -> 38
    assert!((suggest(63.0, "intermediate", 10.0) - 38.0).abs() < f64::EPSILON);
    // 61 * 0.5 = 30.5 -> 31
    assert!((suggest(61.0, "beginner", 10.0) - 31.0).abs() < f64::EPSILON);
}

#[test]
fn test_non_positive_weight_is_invalid_input() {
    let config = LoadRecommendationConfig::default();
    for weight in [0.0, -5.0] {
        let err = suggest_load_kg(weight, ExperienceTier::Beginner, 20.0, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_unknown_tier_is_rejected_not_defaulted() {
    let err = "expert".parse::<ExperienceTier>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_custom_config_changes_outcome() {
    let config = LoadRecommendationConfig {
        base_body_weight_ratio: 0.6,
        ..LoadRecommendationConfig::default()
    };
    let load = suggest_load_kg(80.0, ExperienceTier::Beginner, 20.0, &config).unwrap();
    assert!((load - 48.0).abs() < f64::EPSILON);
}

#[test]
fn test_suggestion_for_profile() {
    let profile = male_profile(ExperienceTier::Intermediate);
    let suggestion =
        ExerciseLoadSuggestion::for_profile(&profile, 30.0, &LoadRecommendationConfig::default())
            .unwrap();
    assert!((suggestion.suggested_load_kg - 38.0).abs() < f64::EPSILON);
}
