// ABOUTME: Assessment model with explicit active-group set and catalog-validated values
// ABOUTME: Implements group toggling, raw input recording, and the persistence filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assessment Group Model
//!
//! An assessment records values for any subset of the catalog's groups. Group
//! activation and value storage are independent: deactivating a group keeps
//! its values in memory, but they become invisible to derived computations and
//! are dropped by [`Assessment::collect_for_persistence`].

use super::measurement::{MeasurementRecord, MeasurementValue, SkinfoldSites};
use crate::constants::{groups, measurements};
use crate::errors::{AppError, AppResult, ValidationError};
use crate::taxonomy::{self, list_groups};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Values keyed by group name, then measurement name
pub type MeasurementValues = BTreeMap<String, BTreeMap<String, MeasurementValue>>;

/// One evaluation event for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Identifier assigned by the storage collaborator; `None` until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Student this assessment belongs to
    pub student_id: Uuid,
    /// Evaluation date
    pub date: NaiveDate,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
    /// Groups recorded in this assessment
    #[serde(default)]
    pub active_groups: BTreeSet<String>,
    /// Recorded values, including stale values of inactive groups
    #[serde(default)]
    pub values: MeasurementValues,
}

impl Assessment {
    /// New draft assessment with no active groups
    #[must_use]
    pub fn new(student_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: None,
            student_id,
            date,
            notes: String::new(),
            active_groups: BTreeSet::new(),
            values: BTreeMap::new(),
        }
    }

    /// Set the notes, builder style
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Mark a catalog group as recorded in this assessment
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownGroup` when the group is not in the catalog
    pub fn activate_group(&mut self, group: &str) -> Result<(), ValidationError> {
        let group = taxonomy::require_group(group)?;
        self.active_groups.insert(group.name.to_owned());
        Ok(())
    }

    /// Remove a group from the active set, keeping its values
    ///
    /// Returns whether the group was active.
    pub fn deactivate_group(&mut self, group: &str) -> bool {
        self.active_groups.remove(group)
    }

    /// Whether a group is active
    #[must_use]
    pub fn is_group_active(&self, group: &str) -> bool {
        self.active_groups.contains(group)
    }

    /// Parse and record raw form input for a catalog measurement
    ///
    /// The group does not have to be active; values of inactive groups are
    /// kept but ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownGroup`/`UnknownMeasurement` for names outside
    /// the catalog and `ValidationError::NotANumber` for unparsable numeric input
    pub fn set_value(
        &mut self,
        group: &str,
        measurement: &str,
        raw_input: &str,
    ) -> Result<(), ValidationError> {
        let definition = taxonomy::find_definition(group, measurement)?;
        let value = definition.parse(group, raw_input)?;
        self.values
            .entry(group.to_owned())
            .or_default()
            .insert(definition.name.to_owned(), value);
        Ok(())
    }

    /// Remove a recorded value, returning it
    pub fn clear_value(&mut self, group: &str, measurement: &str) -> Option<MeasurementValue> {
        let group_values = self.values.get_mut(group)?;
        let removed = group_values.remove(measurement);
        if group_values.is_empty() {
            self.values.remove(group);
        }
        removed
    }

    /// Stored value regardless of group activation
    #[must_use]
    pub fn value(&self, group: &str, measurement: &str) -> Option<&MeasurementValue> {
        self.values.get(group)?.get(measurement)
    }

    /// Value of an active group; stale values are invisible
    #[must_use]
    pub fn active_value(&self, group: &str, measurement: &str) -> Option<&MeasurementValue> {
        if self.is_group_active(group) {
            self.value(group, measurement)
        } else {
            None
        }
    }

    /// Numeric value of an active group
    #[must_use]
    pub fn numeric(&self, group: &str, measurement: &str) -> Option<f64> {
        self.active_value(group, measurement)
            .and_then(MeasurementValue::as_f64)
    }

    /// Recorded body weight in kilograms
    #[must_use]
    pub fn weight_kg(&self) -> Option<f64> {
        self.numeric(groups::BODY_MEASUREMENTS, measurements::WEIGHT)
    }

    /// Recorded height in centimeters
    #[must_use]
    pub fn height_cm(&self) -> Option<f64> {
        self.numeric(groups::BODY_MEASUREMENTS, measurements::HEIGHT)
    }

    /// The three Jackson & Pollock skinfold sites
    ///
    /// `Ok(None)` when none of the sites is recorded. The sites are only
    /// usable together.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when some but not all of the three sites are recorded
    pub fn skinfold_sites(&self) -> AppResult<Option<SkinfoldSites>> {
        let site = |name| self.numeric(groups::SKINFOLDS, name);
        match (
            site(measurements::TRICEPS),
            site(measurements::SUBSCAPULAR),
            site(measurements::SUPRAILIAC),
        ) {
            (Some(triceps), Some(subscapular), Some(suprailiac)) => Ok(Some(SkinfoldSites {
                triceps,
                subscapular,
                suprailiac,
            })),
            (None, None, None) => Ok(None),
            (triceps, subscapular, suprailiac) => {
                let missing: Vec<&str> = [
                    (measurements::TRICEPS, triceps),
                    (measurements::SUBSCAPULAR, subscapular),
                    (measurements::SUPRAILIAC, suprailiac),
                ]
                .into_iter()
                .filter_map(|(name, value)| value.is_none().then_some(name))
                .collect();
                Err(AppError::invalid_input(format!(
                    "Incomplete skinfold set, missing: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    /// Rows to hand to the storage collaborator
    ///
    /// Exactly the values whose group is active and which are set, in catalog
    /// order. Values of deactivated groups and blank text are omitted; a
    /// numeric zero is kept.
    #[must_use]
    pub fn collect_for_persistence(&self) -> Vec<MeasurementRecord> {
        list_groups()
            .iter()
            .filter(|group| self.is_group_active(group.name))
            .filter_map(|group| {
                self.values
                    .get(group.name)
                    .map(|group_values| (group, group_values))
            })
            .flat_map(|(group, group_values)| {
                group.definitions.iter().filter_map(move |definition| {
                    group_values
                        .get(definition.name)
                        .filter(|value| value.is_set())
                        .map(|value| MeasurementRecord {
                            group: group.name.to_owned(),
                            measurement: definition.name.to_owned(),
                            value: value.clone(),
                        })
                })
            })
            .collect()
    }

    /// Replace the whole editable payload with that of `replacement`
    ///
    /// Date, notes, active groups and values are all taken from the
    /// replacement; identity (`id`, `student_id`) is kept.
    pub fn replace_payload(&mut self, replacement: Self) {
        self.date = replacement.date;
        self.notes = replacement.notes;
        self.active_groups = replacement.active_groups;
        self.values = replacement.values;
    }

    /// Rebuild an assessment from persisted rows
    ///
    /// Every group that has a row is active.
    #[must_use]
    pub fn from_records(
        id: Uuid,
        student_id: Uuid,
        date: NaiveDate,
        notes: String,
        records: &[MeasurementRecord],
    ) -> Self {
        let mut assessment = Self::new(student_id, date).with_notes(notes);
        assessment.id = Some(id);
        for record in records {
            assessment.active_groups.insert(record.group.clone());
            assessment
                .values
                .entry(record.group.clone())
                .or_default()
                .insert(record.measurement.clone(), record.value.clone());
        }
        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Assessment {
        Assessment::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    #[test]
    fn test_clear_value_drops_empty_group_map() {
        let mut assessment = draft();
        assessment
            .set_value(groups::BODY_MEASUREMENTS, measurements::WEIGHT, "70")
            .unwrap();
        assert!(assessment
            .clear_value(groups::BODY_MEASUREMENTS, measurements::WEIGHT)
            .is_some());
        assert!(assessment.values.is_empty());
    }

    #[test]
    fn test_partial_skinfolds_name_missing_sites() {
        let mut assessment = draft();
        assessment.activate_group(groups::SKINFOLDS).unwrap();
        assessment
            .set_value(groups::SKINFOLDS, measurements::TRICEPS, "12")
            .unwrap();

        let err = assessment.skinfold_sites().unwrap_err();
        assert!(err.message.contains(measurements::SUBSCAPULAR));
        assert!(err.message.contains(measurements::SUPRAILIAC));
        assert!(!err.message.contains(measurements::TRICEPS));
    }

    #[test]
    fn test_from_records_restores_values_and_activation() {
        let mut assessment = draft();
        assessment.activate_group(groups::BODY_MEASUREMENTS).unwrap();
        assessment
            .set_value(groups::BODY_MEASUREMENTS, measurements::WEIGHT, "81.4")
            .unwrap();
        let rows = assessment.collect_for_persistence();

        let id = Uuid::new_v4();
        let restored = Assessment::from_records(
            id,
            assessment.student_id,
            assessment.date,
            String::new(),
            &rows,
        );
        assert_eq!(restored.id, Some(id));
        assert!((restored.weight_kg().unwrap() - 81.4).abs() < f64::EPSILON);
    }
}
