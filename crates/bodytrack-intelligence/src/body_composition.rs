// ABOUTME: Body composition calculations - BMI, Jackson & Pollock body fat, lean and fat mass
// ABOUTME: Pure functions returning full precision; fallback body fat is an explicit entry point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Calculator
//!
//! Derives body-composition metrics from raw anthropometric inputs. All
//! functions return full precision; rounding happens at the presentation
//! boundary (see [`crate::display`]).
//!
//! # Scientific References
//!
//! - Jackson, A.S. & Pollock, M.L. (1978). Generalized equations for predicting body density of men.
//!   *British Journal of Nutrition*, 40(3), 497-504.
//! - Jackson, A.S., Pollock, M.L. & Ward, A. (1980). Generalized equations for predicting body
//!   density of women. *Medicine and Science in Sports and Exercise*, 12(3), 175-181.
//! - Siri, W.E. (1961). Body composition from fluid spaces and density: analysis of methods.
//! - WHO (2000). Obesity: preventing and managing the global epidemic. Technical Report 894.

use crate::config::BodyCompositionConfig;
use bodytrack_core::constants::body_composition::{
    BMI_NORMAL_BELOW, BMI_OVERWEIGHT_BELOW, BMI_UNDERWEIGHT_BELOW, DEFAULT_BODY_FAT_PERCENT,
};
use bodytrack_core::errors::{AppError, AppResult};
use bodytrack_core::models::{Gender, SkinfoldSites};
use serde::{Deserialize, Serialize};

/// Where a body fat percentage came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatSource {
    /// Computed from measured skinfolds
    Measured,
    /// The fallback default, skinfolds were not measured
    Assumed,
}

/// A body fat percentage tagged with its provenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatEstimate {
    /// Body fat percentage
    pub percent: f64,
    /// Provenance
    pub source: BodyFatSource,
}

impl BodyFatEstimate {
    /// Estimate computed from measured skinfolds
    #[must_use]
    pub const fn measured(percent: f64) -> Self {
        Self {
            percent,
            source: BodyFatSource::Measured,
        }
    }

    /// The fallback estimate from [`default_body_fat_percent`]
    #[must_use]
    pub const fn assumed() -> Self {
        Self {
            percent: default_body_fat_percent(),
            source: BodyFatSource::Assumed,
        }
    }
}

/// Lean/fat partition of total body weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MassPartition {
    /// Fat-free mass (kg); negative when body fat exceeds 100%
    pub lean_mass_kg: f64,
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
}

/// Derived body-composition metrics
///
/// Never a source of truth: always recomputable from an assessment plus the
/// student's profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Body fat percentage
    pub body_fat_percent: f64,
    /// Fat-free mass (kg)
    pub lean_mass_kg: f64,
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
    /// Whether body fat was measured or assumed
    pub body_fat_source: BodyFatSource,
}

impl DerivedMetrics {
    /// Copy with every numeric field rounded to `decimals` places
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        use crate::display::round_to;
        Self {
            bmi: round_to(self.bmi, decimals),
            body_fat_percent: round_to(self.body_fat_percent, decimals),
            lean_mass_kg: round_to(self.lean_mass_kg, decimals),
            fat_mass_kg: round_to(self.fat_mass_kg, decimals),
            body_fat_source: self.body_fat_source,
        }
    }

    /// WHO band of this BMI
    #[must_use]
    pub fn bmi_category(&self) -> BmiCategory {
        classify_bmi(self.bmi)
    }
}

/// WHO adult BMI bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

/// Body mass index: `weight / (height/100)^2`
///
/// # Errors
///
/// Returns `InvalidInput` if either argument is not a positive number
pub fn bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be positive, got {weight_kg}"
        )));
    }
    if height_cm.is_nan() || height_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Height must be positive, got {height_cm}"
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// WHO band for a BMI value
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Jackson & Pollock 3-site body density (g/cm³)
///
/// Sites are triceps, subscapular and suprailiac for both genders; the
/// coefficients differ per gender.
///
/// # Errors
///
/// Returns `InvalidInput` if any skinfold is negative or the sum is zero
// Exact published arithmetic chain; fused multiply-add would change the low bits
#[allow(clippy::suboptimal_flops)]
pub fn body_density(
    sites: &SkinfoldSites,
    gender: Gender,
    age_years: u32,
    config: &BodyCompositionConfig,
) -> AppResult<f64> {
    for (name, value) in [
        ("triceps", sites.triceps),
        ("subscapular", sites.subscapular),
        ("suprailiac", sites.suprailiac),
    ] {
        if value.is_nan() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Skinfold {name} must not be negative, got {value}"
            )));
        }
    }

    let sum = sites.sum();
    if sum == 0.0 {
        return Err(AppError::invalid_input(
            "Skinfold sum is zero, body density is undefined",
        ));
    }

    let coef = config.jackson_pollock.for_gender(gender);
    let age = f64::from(age_years);

    Ok(coef.intercept - coef.sum_coef * sum + coef.sum_squared_coef * sum * sum
        - coef.age_coef * age)
}

/// Body fat percentage from the three skinfold sites
///
/// `BF% = 495 / density - 450` with the Jackson & Pollock density. The three
/// sites are required together; callers must not fill missing sites with zero.
///
/// # Errors
///
/// Returns `InvalidInput` if any skinfold is negative, the sum is zero, or the
/// density estimate is not positive
pub fn body_fat_percent(
    sites: &SkinfoldSites,
    gender: Gender,
    age_years: u32,
    config: &BodyCompositionConfig,
) -> AppResult<f64> {
    let density = body_density(sites, gender, age_years, config)?;
    if density <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Body density estimate must be positive, got {density}"
        )));
    }

    Ok(config.siri.numerator / density - config.siri.offset)
}

/// Body fat percentage assumed when skinfolds were not measured (22%)
///
/// This is the only default in the calculator. Callers opt into it
/// explicitly; nothing here substitutes it silently.
#[must_use]
pub const fn default_body_fat_percent() -> f64 {
    DEFAULT_BODY_FAT_PERCENT
}

/// Split body weight into fat and lean mass
///
/// `fat = weight * bf/100`, `lean = weight - fat`. Not clamped: body fat
/// above 100% yields a negative lean mass so bad input stays visible.
#[must_use]
pub fn lean_and_fat_mass_kg(weight_kg: f64, body_fat_percent: f64) -> MassPartition {
    let fat_mass_kg = weight_kg * body_fat_percent / 100.0;
    MassPartition {
        lean_mass_kg: weight_kg - fat_mass_kg,
        fat_mass_kg,
    }
}

/// Assemble derived metrics from explicit inputs
///
/// Which body fat estimate to use (measured or assumed) is decided by the
/// caller.
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not positive
pub fn derive_metrics(
    weight_kg: f64,
    height_cm: f64,
    body_fat: BodyFatEstimate,
) -> AppResult<DerivedMetrics> {
    let bmi = bmi(weight_kg, height_cm)?;
    let partition = lean_and_fat_mass_kg(weight_kg, body_fat.percent);

    Ok(DerivedMetrics {
        bmi,
        body_fat_percent: body_fat.percent,
        lean_mass_kg: partition.lean_mass_kg,
        fat_mass_kg: partition.fat_mass_kg,
        body_fat_source: body_fat.source,
    })
}
