// ABOUTME: Evolution analyzer - directional trends between adjacent assessments for one student
// ABOUTME: Metric-agnostic pairwise comparison plus ready-made extractors for common metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Evolution / Trend Analyzer
//!
//! Given assessments ordered oldest to newest, compares each adjacent pair for
//! one metric. "Previous" means list adjacency: the analyzer never re-sorts,
//! so two assessments sharing a date keep the order the caller supplied.
//!
//! Classification uses exact equality. The built-in extractors round to the
//! display precision first, so values equal at two decimals compare as
//! [`TrendDirection::Stable`].

use crate::body_composition::{bmi, body_fat_percent, lean_and_fat_mass_kg};
use crate::config::IntelligenceConfig;
use crate::display::round_to;
use bodytrack_core::errors::AppError;
use bodytrack_core::models::{Assessment, StudentProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of change between two recorded values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Current value is greater
    Increase,
    /// Current value is smaller
    Decrease,
    /// Values are exactly equal
    Stable,
}

impl TrendDirection {
    /// Classify a signed difference with no tolerance
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Increase
        } else if delta < 0.0 {
            Self::Decrease
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// Comparison of one metric between two adjacent assessments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Index of the earlier assessment in the input
    pub from_index: usize,
    /// Index of the later assessment in the input
    pub to_index: usize,
    /// Value in the earlier assessment
    pub previous: f64,
    /// Value in the later assessment
    pub current: f64,
    /// `current - previous`
    pub delta: f64,
    /// Classification of `delta`
    pub direction: TrendDirection,
}

impl TrendPoint {
    /// Copy with values rounded for presentation; direction is kept as computed
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            previous: round_to(self.previous, decimals),
            current: round_to(self.current, decimals),
            delta: round_to(self.delta, decimals),
            ..*self
        }
    }
}

/// Pairwise trend over adjacent assessments
///
/// Emits at most `assessments.len() - 1` points. A pair where either side
/// lacks the metric is skipped rather than compared against zero.
pub fn trend_series<F>(assessments: &[Assessment], extract: F) -> Vec<TrendPoint>
where
    F: Fn(&Assessment) -> Option<f64>,
{
    let values: Vec<Option<f64>> = assessments.iter().map(&extract).collect();

    values
        .windows(2)
        .enumerate()
        .filter_map(|(from_index, pair)| {
            let &[Some(previous), Some(current)] = pair else {
                return None;
            };
            let delta = current - previous;
            Some(TrendPoint {
                from_index,
                to_index: from_index + 1,
                previous,
                current,
                delta,
                direction: TrendDirection::from_delta(delta),
            })
        })
        .collect()
}

/// Metrics with built-in extractors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum EvolutionMetric {
    /// Recorded body weight
    Weight,
    /// BMI from the assessment's own weight and height
    Bmi,
    /// Body fat from measured skinfolds only
    BodyFatPercent,
    /// Lean mass from recorded weight and measured body fat
    LeanMassKg,
    /// Fat mass from recorded weight and measured body fat
    FatMassKg,
    /// Any numeric catalog measurement
    Measurement {
        /// Group name
        group: String,
        /// Measurement name
        measurement: String,
    },
}

impl EvolutionMetric {
    /// Short name used in logs and the CLI
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Weight => "weight",
            Self::Bmi => "bmi",
            Self::BodyFatPercent => "body_fat_percent",
            Self::LeanMassKg => "lean_mass_kg",
            Self::FatMassKg => "fat_mass_kg",
            Self::Measurement { measurement, .. } => measurement,
        }
    }

    /// Value of this metric in one assessment, rounded to the display precision
    ///
    /// The precision is `config.display.decimal_places`, so overriding it
    /// (`BODYTRACK_DISPLAY_DECIMALS`) also changes which adjacent pairs
    /// compare as Stable.
    ///
    /// Returns `None` when the inputs were not recorded or are out of domain.
    /// Assumed body fat is never used: without measured skinfolds the body
    /// fat and mass metrics are absent.
    #[must_use]
    pub fn extract(
        &self,
        assessment: &Assessment,
        profile: &StudentProfile,
        config: &IntelligenceConfig,
    ) -> Option<f64> {
        let raw = match self {
            Self::Weight => assessment.weight_kg(),
            Self::Bmi => bmi(assessment.weight_kg()?, assessment.height_cm()?).ok(),
            Self::BodyFatPercent => measured_body_fat(assessment, profile, config),
            Self::LeanMassKg => {
                let weight = assessment.weight_kg()?;
                let body_fat = measured_body_fat(assessment, profile, config)?;
                Some(lean_and_fat_mass_kg(weight, body_fat).lean_mass_kg)
            }
            Self::FatMassKg => {
                let weight = assessment.weight_kg()?;
                let body_fat = measured_body_fat(assessment, profile, config)?;
                Some(lean_and_fat_mass_kg(weight, body_fat).fat_mass_kg)
            }
            Self::Measurement { group, measurement } => assessment.numeric(group, measurement),
        }?;

        Some(round_to(raw, config.display.decimal_places))
    }
}

impl FromStr for EvolutionMetric {
    type Err = AppError;

    /// Parses the derived metric names; catalog measurements are built directly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "bmi" => Ok(Self::Bmi),
            "body_fat" | "body_fat_percent" => Ok(Self::BodyFatPercent),
            "lean_mass" | "lean_mass_kg" => Ok(Self::LeanMassKg),
            "fat_mass" | "fat_mass_kg" => Ok(Self::FatMassKg),
            other => Err(AppError::invalid_input(format!(
                "Unknown evolution metric '{other}'"
            ))),
        }
    }
}

fn measured_body_fat(
    assessment: &Assessment,
    profile: &StudentProfile,
    config: &IntelligenceConfig,
) -> Option<f64> {
    let sites = assessment.skinfold_sites().ok()??;
    body_fat_percent(
        &sites,
        profile.gender,
        profile.age,
        &config.body_composition,
    )
    .ok()
}

/// Trend of one metric over a student's history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvolutionSummary {
    /// Metric analyzed
    pub metric: EvolutionMetric,
    /// Adjacent comparisons
    pub points: Vec<TrendPoint>,
    /// Earliest recorded value
    pub first: Option<f64>,
    /// Latest recorded value
    pub last: Option<f64>,
    /// `last - first` when at least two assessments recorded the metric
    pub net_change: Option<f64>,
    /// Classification of `net_change`
    pub overall: Option<TrendDirection>,
}

impl EvolutionSummary {
    /// Analyze `metric` across assessments ordered oldest to newest
    #[must_use]
    pub fn analyze(
        metric: EvolutionMetric,
        assessments: &[Assessment],
        profile: &StudentProfile,
        config: &IntelligenceConfig,
    ) -> Self {
        let extract = |a: &Assessment| metric.extract(a, profile, config);
        let points = trend_series(assessments, extract);

        let recorded: Vec<f64> = assessments.iter().filter_map(extract).collect();
        let first = recorded.first().copied();
        let last = recorded.last().copied();
        let net_change = match recorded.as_slice() {
            [earliest, .., latest] => Some(round_to(latest - earliest, config.display.decimal_places)),
            _ => None,
        };

        Self {
            metric,
            points,
            first,
            last,
            net_change,
            overall: net_change.map(TrendDirection::from_delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_direction_has_no_tolerance() {
        assert_eq!(TrendDirection::from_delta(1e-12), TrendDirection::Increase);
        assert_eq!(TrendDirection::from_delta(-1e-12), TrendDirection::Decrease);
        assert_eq!(TrendDirection::from_delta(0.0), TrendDirection::Stable);
    }

    #[test]
    fn test_metric_names_parse() {
        assert_eq!("BMI".parse::<EvolutionMetric>().unwrap(), EvolutionMetric::Bmi);
        assert_eq!(
            "body_fat".parse::<EvolutionMetric>().unwrap(),
            EvolutionMetric::BodyFatPercent
        );
        assert!("waist".parse::<EvolutionMetric>().is_err());
    }

    #[test]
    fn test_empty_and_single_inputs_yield_no_points() {
        assert!(trend_series(&[], |_| Some(1.0)).is_empty());

        let single = [Assessment::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
        )];
        assert!(trend_series(&single, |_| Some(1.0)).is_empty());
    }

    #[test]
    fn test_measurement_metric_serializes_with_tag() {
        let metric = EvolutionMetric::Measurement {
            group: "Body Measurements".to_owned(),
            measurement: "Waist".to_owned(),
        };
        let value = serde_json::to_value(&metric).unwrap();
        assert_eq!(value["metric"], "measurement");
        assert_eq!(value["measurement"], "Waist");

        let weight = serde_json::to_value(EvolutionMetric::Weight).unwrap();
        assert_eq!(weight, serde_json::json!({ "metric": "weight" }));
    }
}
