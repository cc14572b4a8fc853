// ABOUTME: Intelligence configuration for body composition, load recommendation, and display
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `body_composition` - Jackson & Pollock coefficients and Siri conversion
//! - `load_recommendation` - starting-load heuristic factors
//!
//! Defaults reproduce the published formulas and the adopted load heuristic.
//! Environment variables may override the load heuristic and display precision.

/// Jackson & Pollock coefficients and the Siri conversion
pub mod body_composition;
/// Configuration loading and validation errors
pub mod error;
/// Starting-load heuristic factors
pub mod load_recommendation;

pub use body_composition::{
    BodyCompositionConfig, DensityCoefficients, JacksonPollockConfig, SiriConfig,
};
pub use error::ConfigError;
pub use load_recommendation::LoadRecommendationConfig;

use bodytrack_core::constants::display::DECIMAL_PLACES;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Largest supported display precision
const MAX_DECIMAL_PLACES: u32 = 6;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Body composition formulas
    pub body_composition: BodyCompositionConfig,
    /// Starting-load heuristic
    pub load_recommendation: LoadRecommendationConfig,
    /// Presentation rounding
    pub display: DisplayConfig,
}

/// Rounding applied at the presentation and persistence boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places (2)
    pub decimal_places: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_places: DECIMAL_PLACES,
        }
    }
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let load = &self.load_recommendation;

        if load.base_body_weight_ratio <= 0.0 || load.base_body_weight_ratio > 2.0 {
            return Err(ConfigError::ValueOutOfRange(
                "base_body_weight_ratio must be in (0, 2]",
            ));
        }
        if load.intermediate_multiplier < 1.0 || load.advanced_multiplier < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Experience multipliers must be >= 1.0",
            ));
        }
        if load.intermediate_multiplier > load.advanced_multiplier {
            return Err(ConfigError::InvalidRange(
                "intermediate_multiplier must be <= advanced_multiplier",
            ));
        }
        if load.high_body_fat_threshold_percent <= 0.0
            || load.high_body_fat_threshold_percent >= 100.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "high_body_fat_threshold_percent must be in (0, 100)",
            ));
        }
        if load.high_body_fat_factor <= 0.0 || load.high_body_fat_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "high_body_fat_factor must be in (0, 1]",
            ));
        }

        let siri = &self.body_composition.siri;
        if siri.numerator <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Siri numerator must be positive",
            ));
        }

        if self.display.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValueOutOfRange(
                "decimal_places must be at most 6",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let load = &mut self.load_recommendation;
        Self::apply_env_var("BODYTRACK_LOAD_BASE_RATIO", &mut load.base_body_weight_ratio)?;
        Self::apply_env_var(
            "BODYTRACK_LOAD_INTERMEDIATE_MULTIPLIER",
            &mut load.intermediate_multiplier,
        )?;
        Self::apply_env_var(
            "BODYTRACK_LOAD_ADVANCED_MULTIPLIER",
            &mut load.advanced_multiplier,
        )?;
        Self::apply_env_var(
            "BODYTRACK_LOAD_BODY_FAT_THRESHOLD",
            &mut load.high_body_fat_threshold_percent,
        )?;
        Self::apply_env_var(
            "BODYTRACK_LOAD_BODY_FAT_FACTOR",
            &mut load.high_body_fat_factor,
        )?;

        Self::apply_env_var(
            "BODYTRACK_DISPLAY_DECIMALS",
            &mut self.display.decimal_places,
        )?;

        Ok(self)
    }
}
