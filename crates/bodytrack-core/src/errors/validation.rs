// ABOUTME: Validation errors raised while recording raw measurement input
// ABOUTME: Converts into AppError so taxonomy failures share the unified error shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors produced when raw form input is checked against the measurement catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric measurement received input that is not a finite number
    #[error("'{input}' is not a valid number for {group} / {measurement}")]
    NotANumber {
        /// Group the measurement belongs to
        group: String,
        /// Measurement name
        measurement: String,
        /// Raw input as typed
        input: String,
    },

    /// The group name is not part of the catalog
    #[error("Unknown measurement group '{0}'")]
    UnknownGroup(String),

    /// The measurement name is not part of the given group
    #[error("Unknown measurement '{measurement}' in group '{group}'")]
    UnknownMeasurement {
        /// Group that was searched
        group: String,
        /// Measurement name that was not found
        measurement: String,
    },
}

impl ValidationError {
    /// Error code this validation failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotANumber { .. } => ErrorCode::InvalidFormat,
            Self::UnknownGroup(_) | Self::UnknownMeasurement { .. } => ErrorCode::InvalidInput,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}
