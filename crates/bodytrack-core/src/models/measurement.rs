// ABOUTME: Measurement value types - numeric-with-unit or free text - and persistence rows
// ABOUTME: Defines the "set" rule that decides which values cross the storage boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recorded measurement value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeasurementValue {
    /// Finite number with the unit of its catalog definition
    Numeric {
        /// The value
        value: f64,
        /// Unit, copied from the catalog
        unit: String,
    },
    /// Free text; the empty string means "left blank"
    Text {
        /// The text as typed
        value: String,
    },
}

impl MeasurementValue {
    /// Numeric value with a unit
    #[must_use]
    pub fn numeric(value: f64, unit: impl Into<String>) -> Self {
        Self::Numeric {
            value,
            unit: unit.into(),
        }
    }

    /// Text value
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Whether this value counts as recorded
    ///
    /// Any numeric value is set, zero included. Text is set unless it is the
    /// empty string.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Numeric { .. } => true,
            Self::Text { value } => !value.is_empty(),
        }
    }

    /// Numeric value, `None` for text
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric { value, .. } => Some(*value),
            Self::Text { .. } => None,
        }
    }

    /// Text value, `None` for numbers
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Numeric { .. } => None,
            Self::Text { value } => Some(value),
        }
    }

    /// Unit of a numeric value
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Numeric { unit, .. } => Some(unit),
            Self::Text { .. } => None,
        }
    }
}

/// One flat row handed to the storage collaborator
///
/// `(group, measurement, value)`; the unit travels inside numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Group name
    pub group: String,
    /// Measurement name
    pub measurement: String,
    /// Recorded value
    pub value: MeasurementValue,
}

impl MeasurementRecord {
    /// Unit of a numeric row
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.value.unit()
    }
}

/// The three Jackson & Pollock skinfold sites, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinfoldSites {
    /// Triceps skinfold (mm)
    pub triceps: f64,
    /// Subscapular skinfold (mm)
    pub subscapular: f64,
    /// Suprailiac skinfold (mm)
    pub suprailiac: f64,
}

impl SkinfoldSites {
    /// Sum of the three sites
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.triceps + self.subscapular + self.suprailiac
    }
}
