// ABOUTME: Body composition configuration - Jackson & Pollock coefficients and Siri conversion
// ABOUTME: Defaults reproduce the published 3-site equations exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Configuration
//!
//! # Scientific References
//!
//! - Jackson & Pollock (1978), men: `BD = 1.10938 - 0.0008267*S + 0.0000016*S^2 - 0.0002574*age`
//! - Jackson, Pollock & Ward (1980), women: `BD = 1.0994921 - 0.0009929*S + 0.0000023*S^2 - 0.0001392*age`
//! - Siri (1961): `BF% = 495 / BD - 450`

use bodytrack_core::constants::body_composition::{
    JP3_FEMALE_AGE_COEF, JP3_FEMALE_INTERCEPT, JP3_FEMALE_SUM_COEF, JP3_FEMALE_SUM_SQUARED_COEF,
    JP3_MALE_AGE_COEF, JP3_MALE_INTERCEPT, JP3_MALE_SUM_COEF, JP3_MALE_SUM_SQUARED_COEF,
    SIRI_NUMERATOR, SIRI_OFFSET,
};
use bodytrack_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Body composition calculation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// 3-site body density regression
    pub jackson_pollock: JacksonPollockConfig,
    /// Density to body fat conversion
    pub siri: SiriConfig,
}

/// Gender-specific 3-site body density coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JacksonPollockConfig {
    /// Male coefficients (triceps/subscapular/suprailiac variant)
    pub male: DensityCoefficients,
    /// Female coefficients (triceps/subscapular/suprailiac variant)
    pub female: DensityCoefficients,
}

/// `density = intercept - sum_coef*S + sum_squared_coef*S^2 - age_coef*age`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityCoefficients {
    /// Constant term
    pub intercept: f64,
    /// Subtracted per mm of skinfold sum
    pub sum_coef: f64,
    /// Added per mm^2 of skinfold sum
    pub sum_squared_coef: f64,
    /// Subtracted per year of age
    pub age_coef: f64,
}

/// Siri two-compartment conversion: `BF% = numerator / density - offset`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiriConfig {
    /// Numerator (495)
    pub numerator: f64,
    /// Offset (450)
    pub offset: f64,
}

impl JacksonPollockConfig {
    /// Coefficients for a gender
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> &DensityCoefficients {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

impl Default for JacksonPollockConfig {
    fn default() -> Self {
        Self {
            male: DensityCoefficients {
                intercept: JP3_MALE_INTERCEPT,
                sum_coef: JP3_MALE_SUM_COEF,
                sum_squared_coef: JP3_MALE_SUM_SQUARED_COEF,
                age_coef: JP3_MALE_AGE_COEF,
            },
            female: DensityCoefficients {
                intercept: JP3_FEMALE_INTERCEPT,
                sum_coef: JP3_FEMALE_SUM_COEF,
                sum_squared_coef: JP3_FEMALE_SUM_SQUARED_COEF,
                age_coef: JP3_FEMALE_AGE_COEF,
            },
        }
    }
}

impl Default for SiriConfig {
    fn default() -> Self {
        Self {
            numerator: SIRI_NUMERATOR,
            offset: SIRI_OFFSET,
        }
    }
}
