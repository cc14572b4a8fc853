// ABOUTME: Command implementations for bodytrack-cli
// ABOUTME: JSON file input, service calls, pretty JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bodytrack::database_plugins::InMemoryAssessmentStore;
use bodytrack::errors::{AppError, AppResult};
use bodytrack::intelligence::body_composition::{default_body_fat_percent, BmiCategory};
use bodytrack::intelligence::evolution::EvolutionMetric;
use bodytrack::intelligence::load_recommendation::{suggest_load_kg, ExerciseLoadSuggestion};
use bodytrack::intelligence::{DerivedMetrics, IntelligenceConfig};
use bodytrack::models::{Assessment, ExperienceTier, StudentProfile};
use bodytrack::services::AssessmentService;
use bodytrack::taxonomy::list_groups;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Serialize)]
struct MetricsReport {
    #[serde(flatten)]
    metrics: DerivedMetrics,
    bmi_category: BmiCategory,
}

/// Print the measurement catalog
pub fn catalog() -> AppResult<()> {
    print_json(&list_groups())
}

/// Print derived metrics for one assessment
pub fn metrics(profile_path: &Path, assessment_path: &Path) -> AppResult<()> {
    let profile: StudentProfile = read_json(profile_path)?;
    let assessment: Assessment = read_json(assessment_path)?;

    let service = AssessmentService::new(InMemoryAssessmentStore::new());
    let metrics = service.derived_metrics(&assessment, &profile)?;

    print_json(&MetricsReport {
        bmi_category: metrics.bmi_category(),
        metrics,
    })
}

/// Print a starting-load suggestion
pub fn load(weight_kg: f64, tier: &str, body_fat: Option<f64>) -> AppResult<()> {
    let tier: ExperienceTier = tier.parse()?;
    let body_fat_percent = body_fat.unwrap_or_else(|| {
        let assumed = default_body_fat_percent();
        warn!(body_fat = assumed, "No body fat given, assuming default");
        assumed
    });

    let suggested_load_kg = suggest_load_kg(
        weight_kg,
        tier,
        body_fat_percent,
        &IntelligenceConfig::global().load_recommendation,
    )?;

    print_json(&ExerciseLoadSuggestion { suggested_load_kg })
}

/// Print the evolution of one metric over a history file
///
/// The file order is the comparison order: adjacent entries are compared
/// without re-sorting by date.
pub fn evolution(
    profile_path: &Path,
    assessments_path: &Path,
    metric: &str,
    group: Option<String>,
    measurement: Option<String>,
) -> AppResult<()> {
    let profile: StudentProfile = read_json(profile_path)?;
    let assessments: Vec<Assessment> = read_json(assessments_path)?;
    let metric = parse_metric(metric, group, measurement)?;

    let (history, skipped): (Vec<Assessment>, Vec<Assessment>) = assessments
        .into_iter()
        .partition(|assessment| assessment.student_id == profile.id);
    for other in &skipped {
        warn!(
            student.id = %other.student_id,
            "Skipping assessment of another student"
        );
    }
    info!(count = history.len(), "Loaded assessment history");

    let service = AssessmentService::new(InMemoryAssessmentStore::new());
    let summary = service.evolution_of(&history, &profile, metric);
    print_json(&summary)
}

fn parse_metric(
    metric: &str,
    group: Option<String>,
    measurement: Option<String>,
) -> AppResult<EvolutionMetric> {
    if !metric.trim().eq_ignore_ascii_case("measurement") {
        return metric.parse();
    }

    match (group, measurement) {
        (Some(group), Some(measurement)) => Ok(EvolutionMetric::Measurement { group, measurement }),
        _ => Err(AppError::invalid_input(
            "--metric measurement requires --group and --measurement",
        )),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    debug!(path = %path.display(), "Reading JSON input");
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
