// ABOUTME: Core types and constants for the bodytrack assessment platform
// ABOUTME: Foundation crate with error handling, the measurement catalog, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bodytrack Core
//!
//! Foundation crate providing shared types for the body-composition assessment
//! engine. Everything here is plain data plus validation; the calculators live in
//! `bodytrack-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ValidationError`
//! - **constants**: Catalog keys and physiological constants
//! - **taxonomy**: The fixed catalog of measurement groups and definitions
//! - **models**: Assessments, measurement values and student profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Catalog keys and physiological constants
pub mod constants;

/// Fixed catalog of measurement groups and their definitions
pub mod taxonomy;

/// Assessment, measurement value and student profile models
pub mod models;
