// ABOUTME: Domain service layer tying the calculators to the storage collaborator
// ABOUTME: Owns the body fat fallback policy and presentation rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Calculators in `bodytrack-intelligence` never substitute defaults or log.
//! Services decide recovery policy (such as assuming 22% body fat when no
//! skinfolds were measured), log it, and round results for presentation.

/// Assessment lifecycle, derived metrics, load suggestions and evolution
pub mod assessments;

pub use assessments::AssessmentService;
