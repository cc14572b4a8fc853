// ABOUTME: Assessment service - create/update/delete/history plus derived metrics and trends
// ABOUTME: Resolves weight, height and body fat for calculators and rounds results for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::AssessmentRepository;
use crate::errors::{AppError, AppResult};
use bodytrack_core::models::{Assessment, StudentProfile};
use bodytrack_intelligence::body_composition::{
    body_fat_percent, derive_metrics, BodyFatEstimate, DerivedMetrics,
};
use bodytrack_intelligence::evolution::{EvolutionMetric, EvolutionSummary};
use bodytrack_intelligence::load_recommendation::ExerciseLoadSuggestion;
use bodytrack_intelligence::IntelligenceConfig;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Assessment operations over a storage backend
pub struct AssessmentService<R: AssessmentRepository> {
    repository: R,
    config: IntelligenceConfig,
}

impl<R: AssessmentRepository> AssessmentService<R> {
    /// Service using the global intelligence configuration
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, IntelligenceConfig::global().clone())
    }

    /// Service with an explicit configuration
    #[must_use]
    pub const fn with_config(repository: R, config: IntelligenceConfig) -> Self {
        Self { repository, config }
    }

    /// Underlying storage backend
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Persist a new assessment and return it as stored
    ///
    /// Only active groups and set values are persisted, so the returned
    /// assessment drops stale values of inactive groups.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    pub async fn create(&self, assessment: &Assessment) -> AppResult<Assessment> {
        let id = self.repository.insert(assessment).await?;
        info!(
            assessment.id = %id,
            student.id = %assessment.student_id,
            groups = assessment.active_groups.len(),
            "Created assessment"
        );
        self.require(id).await
    }

    /// Replace the date, notes and values of an existing assessment
    ///
    /// There is no partial patch: everything editable comes from `replacement`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `id` does not exist, or `InvalidInput`
    /// if `replacement` belongs to a different student
    pub async fn update(&self, id: Uuid, replacement: Assessment) -> AppResult<Assessment> {
        let mut existing = self.require(id).await?;
        if replacement.student_id != existing.student_id {
            return Err(AppError::invalid_input(format!(
                "Assessment {id} belongs to student {}, not {}",
                existing.student_id, replacement.student_id
            )));
        }

        existing.replace_payload(replacement);
        self.repository.replace(id, &existing).await?;
        info!(assessment.id = %id, "Updated assessment");
        self.require(id).await
    }

    /// Hard-delete an assessment and its rows
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `id` does not exist
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        info!(assessment.id = %id, "Deleted assessment");
        Ok(())
    }

    /// Load one assessment
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `id` does not exist
    pub async fn get(&self, id: Uuid) -> AppResult<Assessment> {
        self.require(id).await
    }

    /// A student's assessments, oldest first
    ///
    /// Sorting is stable, so assessments sharing a date keep storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    pub async fn history(&self, student_id: Uuid) -> AppResult<Vec<Assessment>> {
        let mut assessments = self.repository.list_for_student(student_id).await?;
        assessments.sort_by_key(|assessment| assessment.date);
        debug!(student.id = %student_id, count = assessments.len(), "Loaded history");
        Ok(assessments)
    }

    /// Derived metrics for one assessment, rounded for display
    ///
    /// Weight and height come from the assessment when recorded, otherwise
    /// from the profile. Body fat comes from measured skinfolds, otherwise
    /// the 22% default is assumed and flagged in the result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-positive weight or height, a partial
    /// skinfold set, or out-of-domain skinfolds
    pub fn derived_metrics(
        &self,
        assessment: &Assessment,
        profile: &StudentProfile,
    ) -> AppResult<DerivedMetrics> {
        let weight_kg = assessment.weight_kg().unwrap_or(profile.weight_kg);
        let height_cm = assessment.height_cm().unwrap_or(profile.height_cm);
        let body_fat = self.resolve_body_fat(Some(assessment), profile)?;

        let metrics = derive_metrics(weight_kg, height_cm, body_fat)?;
        Ok(metrics.rounded(self.config.display.decimal_places))
    }

    /// Starting-load suggestion for a new exercise entry
    ///
    /// Body fat comes from the given assessment's skinfolds when measured,
    /// otherwise the 22% default is assumed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive profile weight or an
    /// invalid skinfold set
    pub fn suggest_load(
        &self,
        profile: &StudentProfile,
        latest: Option<&Assessment>,
    ) -> AppResult<ExerciseLoadSuggestion> {
        let body_fat = self.resolve_body_fat(latest, profile)?;
        let suggestion = ExerciseLoadSuggestion::for_profile(
            profile,
            body_fat.percent,
            &self.config.load_recommendation,
        )?;
        debug!(
            student.id = %profile.id,
            tier = %profile.experience_tier,
            body_fat = body_fat.percent,
            load_kg = suggestion.suggested_load_kg,
            "Suggested starting load"
        );
        Ok(suggestion)
    }

    /// Trend of one metric over the student's history
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    pub async fn evolution(
        &self,
        profile: &StudentProfile,
        metric: EvolutionMetric,
    ) -> AppResult<EvolutionSummary> {
        let history = self.history(profile.id).await?;
        Ok(self.evolution_of(&history, profile, metric))
    }

    /// Trend of one metric over assessments already ordered oldest first
    #[must_use]
    pub fn evolution_of(
        &self,
        assessments: &[Assessment],
        profile: &StudentProfile,
        metric: EvolutionMetric,
    ) -> EvolutionSummary {
        let decimals = self.config.display.decimal_places;
        let mut summary = EvolutionSummary::analyze(metric, assessments, profile, &self.config);
        for point in &mut summary.points {
            *point = point.rounded(decimals);
        }
        debug!(
            student.id = %profile.id,
            metric = summary.metric.name(),
            points = summary.points.len(),
            "Computed evolution"
        );
        summary
    }

    fn resolve_body_fat(
        &self,
        assessment: Option<&Assessment>,
        profile: &StudentProfile,
    ) -> AppResult<BodyFatEstimate> {
        let sites = match assessment {
            Some(assessment) => assessment.skinfold_sites()?,
            None => None,
        };

        if let Some(sites) = sites {
            let percent = body_fat_percent(
                &sites,
                profile.gender,
                profile.age,
                &self.config.body_composition,
            )?;
            return Ok(BodyFatEstimate::measured(percent));
        }

        let assumed = BodyFatEstimate::assumed();
        warn!(
            student.id = %profile.id,
            body_fat = assumed.percent,
            "No skinfolds measured, assuming default body fat"
        );
        Ok(assumed)
    }

    async fn require(&self, id: Uuid) -> AppResult<Assessment> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Assessment {id}")))
    }
}
