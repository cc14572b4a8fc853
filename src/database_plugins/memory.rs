// ABOUTME: In-memory assessment store keeping header and measurement rows per assessment
// ABOUTME: Hard deletes, storage-assigned ids and timestamps, shared via Arc<RwLock>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AssessmentRepository;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use bodytrack_core::models::{Assessment, MeasurementRecord};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Persisted header plus child rows
#[derive(Debug, Clone)]
struct StoredAssessment {
    student_id: Uuid,
    date: NaiveDate,
    notes: String,
    records: Vec<MeasurementRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    sequence: u64,
}

impl StoredAssessment {
    fn to_assessment(&self, id: Uuid) -> Assessment {
        Assessment::from_records(
            id,
            self.student_id,
            self.date,
            self.notes.clone(),
            &self.records,
        )
    }
}

#[derive(Debug, Default)]
struct StoreState {
    assessments: HashMap<Uuid, StoredAssessment>,
    next_sequence: u64,
}

/// Assessment store backed by a `HashMap`
///
/// Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryAssessmentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persisted rows of one assessment, `None` if it does not exist
    pub async fn records(&self, id: Uuid) -> Option<Vec<MeasurementRecord>> {
        self.state
            .read()
            .await
            .assessments
            .get(&id)
            .map(|stored| stored.records.clone())
    }

    /// Creation and last update timestamps of one assessment
    pub async fn timestamps(&self, id: Uuid) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.state
            .read()
            .await
            .assessments
            .get(&id)
            .map(|stored| (stored.created_at, stored.updated_at))
    }

    /// Number of stored assessments
    pub async fn len(&self) -> usize {
        self.state.read().await.assessments.len()
    }

    /// Whether the store holds no assessments
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.assessments.is_empty()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentStore {
    async fn insert(&self, assessment: &Assessment) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let records = assessment.collect_for_persistence();
        let row_count = records.len();

        let mut state = self.state.write().await;
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.assessments.insert(
            id,
            StoredAssessment {
                student_id: assessment.student_id,
                date: assessment.date,
                notes: assessment.notes.clone(),
                records,
                created_at: now,
                updated_at: now,
                sequence,
            },
        );
        drop(state);

        debug!(assessment.id = %id, rows = row_count, "Inserted assessment");
        Ok(id)
    }

    async fn replace(&self, id: Uuid, assessment: &Assessment) -> AppResult<()> {
        let records = assessment.collect_for_persistence();
        let row_count = records.len();

        let mut state = self.state.write().await;
        let stored = state
            .assessments
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Assessment {id}")))?;
        stored.date = assessment.date;
        stored.notes.clone_from(&assessment.notes);
        stored.records = records;
        stored.updated_at = Utc::now();
        drop(state);

        debug!(assessment.id = %id, rows = row_count, "Replaced assessment payload");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.state.write().await.assessments.remove(&id);
        if removed.is_none() {
            return Err(AppError::not_found(format!("Assessment {id}")));
        }

        debug!(assessment.id = %id, "Deleted assessment");
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Assessment>> {
        Ok(self
            .state
            .read()
            .await
            .assessments
            .get(&id)
            .map(|stored| stored.to_assessment(id)))
    }

    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<Assessment>> {
        let state = self.state.read().await;
        let mut matching: Vec<(u64, Assessment)> = state
            .assessments
            .iter()
            .filter(|(_, stored)| stored.student_id == student_id)
            .map(|(id, stored)| (stored.sequence, stored.to_assessment(*id)))
            .collect();
        drop(state);

        matching.sort_by_key(|(sequence, _)| *sequence);
        Ok(matching
            .into_iter()
            .map(|(_, assessment)| assessment)
            .collect())
    }
}
