// ABOUTME: Tests for the assessment service over the in-memory store
// ABOUTME: Covers create/update/delete/history, the body fat fallback policy and evolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use bodytrack::constants::{groups, measurements};
use bodytrack::database_plugins::{AssessmentRepository, InMemoryAssessmentStore};
use bodytrack::errors::ErrorCode;
use bodytrack::intelligence::body_composition::BodyFatSource;
use bodytrack::intelligence::evolution::{EvolutionMetric, TrendDirection};
use bodytrack::intelligence::IntelligenceConfig;
use bodytrack::models::{Assessment, ExperienceTier};
use bodytrack::services::AssessmentService;
use common::{
    add_skinfolds, date, draft, female_profile, init_test_logging, male_profile, with_body,
};
use uuid::Uuid;

fn service() -> AssessmentService<InMemoryAssessmentStore> {
    init_test_logging();
    AssessmentService::with_config(InMemoryAssessmentStore::new(), IntelligenceConfig::default())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn test_create_assigns_id_and_persists_filtered_rows() {
    let service = service();
    let student = Uuid::new_v4();

    let mut assessment = with_body(student, date(2025, 1, 10), "80", "175");
    assessment
        .set_value(groups::POSTURAL_ASSESSMENT, "Spine", "neutral")
        .unwrap();
    assert!(assessment.id.is_none());

    let stored = service.create(&assessment).await.unwrap();
    let id = stored.id.unwrap();

    // Inactive group value never reaches storage
    assert!(stored
        .value(groups::POSTURAL_ASSESSMENT, "Spine")
        .is_none());
    assert_eq!(stored.weight_kg(), Some(80.0));

    let rows = service.repository().records(id).await.unwrap();
    assert_eq!(rows, assessment.collect_for_persistence());
}

#[tokio::test]
async fn test_update_replaces_whole_payload() {
    let service = service();
    let student = Uuid::new_v4();

    let original = with_body(student, date(2025, 1, 10), "80", "175").with_notes("first");
    let id = service.create(&original).await.unwrap().id.unwrap();

    let mut replacement = draft(student, date(2025, 1, 12)).with_notes("corrected");
    replacement.activate_group(groups::STRENGTH_TESTS).unwrap();
    replacement
        .set_value(groups::STRENGTH_TESTS, "Push-ups", "25")
        .unwrap();

    let updated = service.update(id, replacement).await.unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.date, date(2025, 1, 12));
    assert_eq!(updated.notes, "corrected");
    assert!(updated.weight_kg().is_none());
    assert!(!updated.is_group_active(groups::BODY_MEASUREMENTS));
    assert_eq!(service.repository().records(id).await.unwrap().len(), 1);

    let (created_at, updated_at) = service.repository().timestamps(id).await.unwrap();
    assert!(updated_at >= created_at);
}

#[tokio::test]
async fn test_update_rejects_other_student_and_unknown_id() {
    let service = service();
    let student = Uuid::new_v4();
    let id = service
        .create(&draft(student, date(2025, 1, 10)))
        .await
        .unwrap()
        .id
        .unwrap();

    let err = service
        .update(id, draft(Uuid::new_v4(), date(2025, 1, 11)))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = service
        .update(Uuid::new_v4(), draft(student, date(2025, 1, 11)))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_is_hard() {
    let service = service();
    let student = Uuid::new_v4();
    let id = service
        .create(&with_body(student, date(2025, 1, 10), "80", "175"))
        .await
        .unwrap()
        .id
        .unwrap();

    service.delete(id).await.unwrap();

    assert!(service.repository().get(id).await.unwrap().is_none());
    assert!(service.repository().records(id).await.is_none());
    assert!(service.repository().is_empty().await);
    assert!(service.history(student).await.unwrap().is_empty());

    let err = service.delete(id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_history_is_sorted_by_date_and_stable() {
    let service = service();
    let student = Uuid::new_v4();
    let other = Uuid::new_v4();

    for (day, notes) in [(20, "late"), (5, "early-a"), (5, "early-b"), (12, "middle")] {
        service
            .create(&draft(student, date(2025, 1, day)).with_notes(notes))
            .await
            .unwrap();
    }
    service
        .create(&draft(other, date(2025, 1, 1)))
        .await
        .unwrap();

    let notes: Vec<String> = service
        .history(student)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.notes)
        .collect();
    assert_eq!(notes, vec!["early-a", "early-b", "middle", "late"]);
}

#[tokio::test]
async fn test_derived_metrics_with_measured_skinfolds() {
    let service = service();
    let profile = male_profile(ExperienceTier::Beginner);

    let mut assessment = with_body(profile.id, date(2025, 2, 1), "70", "175");
    add_skinfolds(&mut assessment, "12", "10", "8");

    let metrics = service.derived_metrics(&assessment, &profile).unwrap();
    assert_eq!(metrics.body_fat_source, BodyFatSource::Measured);
    assert_close(metrics.bmi, 22.86);
    assert_close(metrics.body_fat_percent, 9.06);
    assert_close(metrics.fat_mass_kg, 6.34);
    assert_close(metrics.lean_mass_kg, 63.66);
}

#[tokio::test]
async fn test_derived_metrics_falls_back_explicitly() {
    let service = service();
    let profile = female_profile(ExperienceTier::Beginner);

    // No body measurements either: weight and height come from the profile
    let assessment = draft(profile.id, date(2025, 2, 1));
    let metrics = service.derived_metrics(&assessment, &profile).unwrap();

    assert_eq!(metrics.body_fat_source, BodyFatSource::Assumed);
    assert_close(metrics.body_fat_percent, 22.0);
    assert_close(metrics.fat_mass_kg, 17.6);
    assert_close(metrics.lean_mass_kg, 62.4);
    assert_close(metrics.bmi, 26.12);
}

#[tokio::test]
async fn test_partial_skinfolds_are_an_error_not_a_fallback() {
    let service = service();
    let profile = male_profile(ExperienceTier::Beginner);

    let mut assessment = with_body(profile.id, date(2025, 2, 1), "70", "175");
    assessment.activate_group(groups::SKINFOLDS).unwrap();
    assessment
        .set_value(groups::SKINFOLDS, measurements::TRICEPS, "12")
        .unwrap();

    let err = service.derived_metrics(&assessment, &profile).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_suggest_load_uses_measured_or_default_body_fat() {
    let service = service();
    let profile = male_profile(ExperienceTier::Intermediate);

    // Default 22% is not above the threshold: 80 * 0.5 * 1.2 = 48
    let suggestion = service.suggest_load(&profile, None).unwrap();
    assert_close(suggestion.suggested_load_kg, 48.0);

    // Thick skinfolds push body fat above 25%: 48 * 0.8 = 38.4 -> 38
    let mut latest = with_body(profile.id, date(2025, 2, 1), "80", "175");
    add_skinfolds(&mut latest, "30", "35", "40");
    let suggestion = service.suggest_load(&profile, Some(&latest)).unwrap();
    assert_close(suggestion.suggested_load_kg, 38.0);
}

#[tokio::test]
async fn test_evolution_over_stored_history() {
    let service = service();
    let profile = male_profile(ExperienceTier::Beginner);

    for (month, weight) in [(3, "72"), (1, "70"), (2, "72")] {
        service
            .create(&with_body(profile.id, date(2025, month, 1), weight, "175"))
            .await
            .unwrap();
    }

    let summary = service
        .evolution(&profile, EvolutionMetric::Weight)
        .await
        .unwrap();

    let directions: Vec<TrendDirection> = summary.points.iter().map(|p| p.direction).collect();
    assert_eq!(
        directions,
        vec![TrendDirection::Increase, TrendDirection::Stable]
    );
    assert_close(summary.points[0].delta, 2.0);
    assert_close(summary.net_change.unwrap(), 2.0);
    assert_eq!(summary.overall, Some(TrendDirection::Increase));
}

#[tokio::test]
async fn test_store_lists_in_insertion_order() {
    init_test_logging();
    let store = InMemoryAssessmentStore::new();
    let student = Uuid::new_v4();

    let mut ids = Vec::new();
    for day in [3, 1, 2] {
        let assessment: Assessment = draft(student, date(2025, 5, day));
        ids.push(store.insert(&assessment).await.unwrap());
    }

    let listed: Vec<Uuid> = store
        .list_for_student(student)
        .await
        .unwrap()
        .into_iter()
        .filter_map(|a| a.id)
        .collect();
    assert_eq!(listed, ids);
    assert_eq!(store.len().await, 3);
}

#[test]
fn test_evolution_of_keeps_list_order() {
    let service = service();
    let profile = male_profile(ExperienceTier::Beginner);

    // List order is the comparison order, even against the dates
    let history = vec![
        with_body(profile.id, date(2025, 3, 1), "72", "175"),
        with_body(profile.id, date(2025, 1, 1), "70", "175"),
    ];

    let summary = service.evolution_of(&history, &profile, EvolutionMetric::Weight);
    assert_eq!(summary.points.len(), 1);

    let point = &summary.points[0];
    assert_eq!((point.from_index, point.to_index), (0, 1));
    assert_close(point.previous, 72.0);
    assert_close(point.current, 70.0);
    assert_eq!(point.direction, TrendDirection::Decrease);
    assert_eq!(summary.overall, Some(TrendDirection::Decrease));
}
