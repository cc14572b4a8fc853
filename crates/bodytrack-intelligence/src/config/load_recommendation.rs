// ABOUTME: Starting-load heuristic configuration - base ratio, tier multipliers, body fat adjustment
// ABOUTME: Defaults are the adopted heuristic values trainers rely on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bodytrack_core::constants::load_recommendation::{
    ADVANCED_MULTIPLIER, BASE_BODY_WEIGHT_RATIO, HIGH_BODY_FAT_FACTOR,
    HIGH_BODY_FAT_THRESHOLD_PERCENT, INTERMEDIATE_MULTIPLIER,
};
use bodytrack_core::models::ExperienceTier;
use serde::{Deserialize, Serialize};

/// Starting-load recommendation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRecommendationConfig {
    /// Starting load as a fraction of body weight (0.5)
    pub base_body_weight_ratio: f64,
    /// Intermediate tier multiplier (1.2)
    pub intermediate_multiplier: f64,
    /// Advanced tier multiplier (1.5)
    pub advanced_multiplier: f64,
    /// Body fat percentage strictly above which the load is reduced (25)
    pub high_body_fat_threshold_percent: f64,
    /// Reduction factor above the threshold (0.8)
    pub high_body_fat_factor: f64,
}

impl LoadRecommendationConfig {
    /// Multiplier for an experience tier; beginners get none
    #[must_use]
    pub const fn tier_multiplier(&self, tier: ExperienceTier) -> f64 {
        match tier {
            ExperienceTier::Beginner => 1.0,
            ExperienceTier::Intermediate => self.intermediate_multiplier,
            ExperienceTier::Advanced => self.advanced_multiplier,
        }
    }
}

impl Default for LoadRecommendationConfig {
    fn default() -> Self {
        Self {
            base_body_weight_ratio: BASE_BODY_WEIGHT_RATIO,
            intermediate_multiplier: INTERMEDIATE_MULTIPLIER,
            advanced_multiplier: ADVANCED_MULTIPLIER,
            high_body_fat_threshold_percent: HIGH_BODY_FAT_THRESHOLD_PERCENT,
            high_body_fat_factor: HIGH_BODY_FAT_FACTOR,
        }
    }
}
