// ABOUTME: Student profile model used as input to body composition and load calculations
// ABOUTME: Gender and experience tier parse from strings and reject unknown values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Gender selecting the regression coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Training experience of a student
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// New to resistance training
    Beginner,
    /// Consistent training history
    Intermediate,
    /// Long, structured training history
    Advanced,
}

impl ExperienceTier {
    /// Tier name as used in forms and configuration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for ExperienceTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience tier: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculation inputs describing one student
///
/// The lifecycle of students belongs to the student-management collaborator;
/// this is a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Student identifier
    pub id: Uuid,
    /// Gender
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Training experience
    pub experience_tier: ExperienceTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_tier_parses_case_insensitively() {
        assert_eq!(
            "Intermediate".parse::<ExperienceTier>().unwrap(),
            ExperienceTier::Intermediate
        );
        assert_eq!(
            " ADVANCED ".parse::<ExperienceTier>().unwrap(),
            ExperienceTier::Advanced
        );
    }

    #[test]
    fn test_unknown_experience_tier_is_rejected() {
        let err = "elite".parse::<ExperienceTier>().unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
        assert!(err.message.contains("elite"));
    }

    #[test]
    fn test_gender_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }
}
