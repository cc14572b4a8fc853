// ABOUTME: Measurement taxonomy - groups, definitions, and value kinds of the fixed catalog
// ABOUTME: Provides lookups by stable string key and parses raw form input per value kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Measurement Taxonomy
//!
//! The catalog is an immutable lookup table built at compile time. Groups and
//! measurements are addressed by name; group order is display order only.

mod catalog;

use crate::errors::ValidationError;
use crate::models::MeasurementValue;
use serde::Serialize;

/// How a measurement's raw input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueKind {
    /// Finite number with a fixed unit
    Numeric {
        /// Unit reported alongside the value
        unit: &'static str,
    },
    /// Arbitrary text, stored verbatim
    FreeText,
}

/// A named measurable quantity inside a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementDefinition {
    /// Name, unique within its group
    pub name: &'static str,
    /// Value interpretation
    #[serde(flatten)]
    pub kind: ValueKind,
}

impl MeasurementDefinition {
    /// Numeric definition with a unit
    #[must_use]
    pub const fn numeric(name: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::Numeric { unit },
        }
    }

    /// Free-text definition
    #[must_use]
    pub const fn free_text(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::FreeText,
        }
    }

    /// Unit of a numeric definition, `None` for free text
    #[must_use]
    pub const fn unit(&self) -> Option<&'static str> {
        match self.kind {
            ValueKind::Numeric { unit } => Some(unit),
            ValueKind::FreeText => None,
        }
    }

    /// Parse raw form input according to this definition's value kind
    ///
    /// Numeric input is trimmed and must parse to a finite number; no range
    /// limits are applied. Free text always succeeds and is stored verbatim,
    /// including the empty string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotANumber` when numeric input is unparsable or not finite
    pub fn parse(&self, group: &str, raw_input: &str) -> Result<MeasurementValue, ValidationError> {
        match self.kind {
            ValueKind::Numeric { unit } => raw_input
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| MeasurementValue::numeric(value, unit))
                .ok_or_else(|| ValidationError::NotANumber {
                    group: group.to_owned(),
                    measurement: self.name.to_owned(),
                    input: raw_input.to_owned(),
                }),
            ValueKind::FreeText => Ok(MeasurementValue::text(raw_input)),
        }
    }
}

/// A named collection of measurement definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementGroup {
    /// Group name, the lookup key
    pub name: &'static str,
    /// Definitions in display order
    pub definitions: &'static [MeasurementDefinition],
}

impl MeasurementGroup {
    /// Look up a definition in this group by name
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&'static MeasurementDefinition> {
        self.definitions.iter().find(|def| def.name == name)
    }
}

/// All measurement groups in display order
///
/// Static and deterministic; every call returns the same slice.
#[must_use]
pub const fn list_groups() -> &'static [MeasurementGroup] {
    catalog::CATALOG
}

/// Look up a group by exact name
#[must_use]
pub fn find_group(name: &str) -> Option<&'static MeasurementGroup> {
    list_groups().iter().find(|group| group.name == name)
}

/// Look up a group by exact name, failing with a validation error
///
/// # Errors
///
/// Returns `ValidationError::UnknownGroup` when the group is not in the catalog
pub fn require_group(name: &str) -> Result<&'static MeasurementGroup, ValidationError> {
    find_group(name).ok_or_else(|| ValidationError::UnknownGroup(name.to_owned()))
}

/// Look up a measurement definition by group and measurement name
///
/// # Errors
///
/// Returns `ValidationError::UnknownGroup` or `ValidationError::UnknownMeasurement`
/// when either name is not part of the catalog
pub fn find_definition(
    group: &str,
    measurement: &str,
) -> Result<&'static MeasurementDefinition, ValidationError> {
    require_group(group)?
        .definition(measurement)
        .ok_or_else(|| ValidationError::UnknownMeasurement {
            group: group.to_owned(),
            measurement: measurement.to_owned(),
        })
}
