// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, student profiles and assessment builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `bodytrack`

use bodytrack::constants::{groups, measurements};
use bodytrack::models::{Assessment, ExperienceTier, Gender, StudentProfile};
use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 30-year-old male, 80 kg, 175 cm
pub fn male_profile(tier: ExperienceTier) -> StudentProfile {
    StudentProfile {
        id: Uuid::new_v4(),
        gender: Gender::Male,
        age: 30,
        weight_kg: 80.0,
        height_cm: 175.0,
        experience_tier: tier,
    }
}

/// Same measurements as [`male_profile`] but female
pub fn female_profile(tier: ExperienceTier) -> StudentProfile {
    StudentProfile {
        gender: Gender::Female,
        ..male_profile(tier)
    }
}

/// Draft assessment with no active groups
pub fn draft(student_id: Uuid, on: NaiveDate) -> Assessment {
    Assessment::new(student_id, on)
}

/// Assessment with weight and height recorded
pub fn with_body(student_id: Uuid, on: NaiveDate, weight: &str, height: &str) -> Assessment {
    let mut assessment = draft(student_id, on);
    assessment.activate_group(groups::BODY_MEASUREMENTS).unwrap();
    assessment
        .set_value(groups::BODY_MEASUREMENTS, measurements::WEIGHT, weight)
        .unwrap();
    assessment
        .set_value(groups::BODY_MEASUREMENTS, measurements::HEIGHT, height)
        .unwrap();
    assessment
}

/// Record the three Jackson & Pollock sites
pub fn add_skinfolds(assessment: &mut Assessment, triceps: &str, subscapular: &str, suprailiac: &str) {
    assessment.activate_group(groups::SKINFOLDS).unwrap();
    for (site, raw) in [
        (measurements::TRICEPS, triceps),
        (measurements::SUBSCAPULAR, subscapular),
        (measurements::SUPRAILIAC, suprailiac),
    ] {
        assessment.set_value(groups::SKINFOLDS, site, raw).unwrap();
    }
}
