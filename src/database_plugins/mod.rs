// ABOUTME: Storage abstraction for assessments owned by the persistence collaborator
// ABOUTME: Async repository trait plus an in-memory backend for tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use async_trait::async_trait;
use bodytrack_core::models::Assessment;
use uuid::Uuid;

/// In-memory assessment store
pub mod memory;

pub use memory::InMemoryAssessmentStore;

/// Assessment persistence abstraction
///
/// Implementations persist exactly the rows produced by
/// [`Assessment::collect_for_persistence`] and assign identifiers and
/// timestamps themselves.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persist a new assessment and return its assigned id
    async fn insert(&self, assessment: &Assessment) -> AppResult<Uuid>;

    /// Replace the whole payload (date, notes, rows) of an existing assessment
    async fn replace(&self, id: Uuid, assessment: &Assessment) -> AppResult<()>;

    /// Remove an assessment and all of its rows
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Load one assessment
    async fn get(&self, id: Uuid) -> AppResult<Option<Assessment>>;

    /// All assessments of a student, in insertion order
    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<Assessment>>;
}
