// ABOUTME: Domain models for assessments, measurement values, and student profiles
// ABOUTME: Re-exports the model types under a single path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Assessment events and their selective group activation
pub mod assessment;
/// Measurement values and persistence rows
pub mod measurement;
/// Student calculation inputs
pub mod student;

pub use assessment::Assessment;
pub use measurement::{MeasurementRecord, MeasurementValue, SkinfoldSites};
pub use student::{ExperienceTier, Gender, StudentProfile};
