// ABOUTME: Main library entry point for the bodytrack assessment platform
// ABOUTME: Wires the measurement catalog and calculators to storage, logging and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bodytrack
//!
//! Gym body-composition assessments: trainers record measurement groups for a
//! student, the engine derives BMI, body fat and lean/fat mass, suggests
//! starting loads, and tracks how metrics evolve between assessments.
//!
//! ## Architecture
//!
//! - **`bodytrack-core`**: errors, constants, the measurement catalog, models
//! - **`bodytrack-intelligence`**: pure calculators and their configuration
//! - **this crate**: storage abstraction, the assessment service, logging
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bodytrack::constants::{groups, measurements};
//! use bodytrack::database_plugins::InMemoryAssessmentStore;
//! use bodytrack::errors::AppResult;
//! use bodytrack::models::Assessment;
//! use bodytrack::services::AssessmentService;
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let service = AssessmentService::new(InMemoryAssessmentStore::new());
//!     let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default();
//!
//!     let mut assessment = Assessment::new(Uuid::new_v4(), date);
//!     assessment.activate_group(groups::BODY_MEASUREMENTS)?;
//!     assessment.set_value(groups::BODY_MEASUREMENTS, measurements::WEIGHT, "72.5")?;
//!
//!     let stored = service.create(&assessment).await?;
//!     println!("Stored assessment {:?}", stored.id);
//!     Ok(())
//! }
//! ```

/// Error types, codes and result alias
pub use bodytrack_core::errors;

/// Catalog keys and physiological constants
pub use bodytrack_core::constants;

/// Measurement catalog
pub use bodytrack_core::taxonomy;

/// Assessment, measurement and student models
pub use bodytrack_core::models;

/// Calculators and their configuration
pub use bodytrack_intelligence as intelligence;

/// Assessment storage abstraction and backends
pub mod database_plugins;

/// Structured logging setup
pub mod logging;

/// Assessment service layer
pub mod services;
