// ABOUTME: Catalog keys and physiological constants shared by the assessment engine
// ABOUTME: Group and measurement names are the stable string keys for catalog lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain.
//!
//! Measurement groups and measurements are referenced everywhere by these
//! string keys rather than by object identity.

/// Measurement group names, in catalog display order
pub mod groups {
    /// Circumferences plus weight and height
    pub const BODY_MEASUREMENTS: &str = "Body Measurements";
    /// Caliper skinfold thickness sites
    pub const SKINFOLDS: &str = "Skinfolds";
    /// Bioimpedance or externally measured composition values
    pub const BODY_COMPOSITION: &str = "Body Composition";
    /// Free-text postural observations
    pub const POSTURAL_ASSESSMENT: &str = "Postural Assessment";
    /// Flexibility and mobility tests
    pub const FLEXIBILITY: &str = "Flexibility";
    /// Muscular strength and endurance tests
    pub const STRENGTH_TESTS: &str = "Strength Tests";
    /// Resting and aerobic cardiovascular tests
    pub const CARDIOVASCULAR_TESTS: &str = "Cardiovascular Tests";
}

/// Measurement names the calculators look up inside an assessment
pub mod measurements {
    /// Body weight (kg), in [`super::groups::BODY_MEASUREMENTS`]
    pub const WEIGHT: &str = "Weight";
    /// Standing height (cm), in [`super::groups::BODY_MEASUREMENTS`]
    pub const HEIGHT: &str = "Height";
    /// Triceps skinfold (mm), in [`super::groups::SKINFOLDS`]
    pub const TRICEPS: &str = "Triceps";
    /// Subscapular skinfold (mm), in [`super::groups::SKINFOLDS`]
    pub const SUBSCAPULAR: &str = "Subscapular";
    /// Suprailiac skinfold (mm), in [`super::groups::SKINFOLDS`]
    pub const SUPRAILIAC: &str = "Suprailiac";
}

/// Measurement units used by the catalog
pub mod units {
    /// Kilograms
    pub const KILOGRAMS: &str = "kg";
    /// Centimeters
    pub const CENTIMETERS: &str = "cm";
    /// Millimeters
    pub const MILLIMETERS: &str = "mm";
    /// Percentage
    pub const PERCENT: &str = "%";
    /// Repetitions
    pub const REPETITIONS: &str = "reps";
    /// Seconds
    pub const SECONDS: &str = "s";
    /// Beats per minute
    pub const BEATS_PER_MINUTE: &str = "bpm";
    /// Kilocalories per day
    pub const KILOCALORIES: &str = "kcal";
    /// Oxygen uptake
    pub const ML_PER_KG_PER_MIN: &str = "ml/kg/min";
    /// Meters
    pub const METERS: &str = "m";
    /// Dimensionless level (e.g. visceral fat rating)
    pub const LEVEL: &str = "level";
}

/// Body composition constants
///
/// References:
/// - Jackson, A.S. & Pollock, M.L. (1978). Generalized equations for predicting body density of men.
///   *British Journal of Nutrition*, 40(3), 497-504.
/// - Jackson, A.S., Pollock, M.L. & Ward, A. (1980). Generalized equations for predicting body density
///   of women. *Medicine and Science in Sports and Exercise*, 12(3), 175-181.
/// - Siri, W.E. (1961). Body composition from fluid spaces and density.
pub mod body_composition {
    /// Body fat percentage assumed when skinfolds were not measured.
    ///
    /// Applied regardless of gender or age; kept as-is so historical
    /// comparisons keep their meaning.
    pub const DEFAULT_BODY_FAT_PERCENT: f64 = 22.0;

    /// Male 3-site intercept
    pub const JP3_MALE_INTERCEPT: f64 = 1.109_38;
    /// Male 3-site linear skinfold-sum coefficient
    pub const JP3_MALE_SUM_COEF: f64 = 0.000_826_7;
    /// Male 3-site quadratic skinfold-sum coefficient
    pub const JP3_MALE_SUM_SQUARED_COEF: f64 = 0.000_001_6;
    /// Male 3-site age coefficient
    pub const JP3_MALE_AGE_COEF: f64 = 0.000_257_4;

    /// Female 3-site intercept
    pub const JP3_FEMALE_INTERCEPT: f64 = 1.099_492_1;
    /// Female 3-site linear skinfold-sum coefficient
    pub const JP3_FEMALE_SUM_COEF: f64 = 0.000_992_9;
    /// Female 3-site quadratic skinfold-sum coefficient
    pub const JP3_FEMALE_SUM_SQUARED_COEF: f64 = 0.000_002_3;
    /// Female 3-site age coefficient
    pub const JP3_FEMALE_AGE_COEF: f64 = 0.000_139_2;

    /// Siri equation numerator: `BF% = 495 / density - 450`
    pub const SIRI_NUMERATOR: f64 = 495.0;
    /// Siri equation offset
    pub const SIRI_OFFSET: f64 = 450.0;

    /// WHO BMI band upper bounds (exclusive)
    pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Upper bound of the normal band
    pub const BMI_NORMAL_BELOW: f64 = 25.0;
    /// Upper bound of the overweight band
    pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Starting-load heuristic constants
pub mod load_recommendation {
    /// Starting load as a fraction of body weight
    pub const BASE_BODY_WEIGHT_RATIO: f64 = 0.5;
    /// Multiplier applied for intermediate students
    pub const INTERMEDIATE_MULTIPLIER: f64 = 1.2;
    /// Multiplier applied for advanced students
    pub const ADVANCED_MULTIPLIER: f64 = 1.5;
    /// Body fat percentage above which the load is reduced
    pub const HIGH_BODY_FAT_THRESHOLD_PERCENT: f64 = 25.0;
    /// Reduction factor applied above the body fat threshold
    pub const HIGH_BODY_FAT_FACTOR: f64 = 0.8;
}

/// Presentation constants
pub mod display {
    /// Decimal places for values handed to presentation and persistence
    pub const DECIMAL_PLACES: u32 = 2;
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported in log records
    pub const BODYTRACK: &str = "bodytrack";
}
