use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use super::catalog::ArchetypeDefinition;
use super::matching::MatchingEngine;
use super::paths::{career_paths, CareerPath};
use super::profile::AssessmentProfile;
use super::ranking::RankedArchetype;
use super::repository::{AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError};
use super::sanitize::{ProfileSanitizer, SanitizeAdjustment};
use super::summary::ProfileSummary;

/// Service composing the sanitizer, repository, and matching engine.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: Arc<MatchingEngine>,
    sanitizer: ProfileSanitizer,
    default_limit: Option<usize>,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: MatchingEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
            sanitizer: ProfileSanitizer::default(),
            default_limit: None,
        }
    }

    pub fn with_sanitizer(mut self, sanitizer: ProfileSanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Limit applied when a caller does not ask for one; `None` ranks everything.
    pub fn with_default_limit(mut self, limit: Option<usize>) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    /// Sanitize and store a profile under `id`, replacing any previous version.
    pub fn save(
        &self,
        id: AssessmentId,
        profile: AssessmentProfile,
    ) -> Result<SavedAssessment, AssessmentServiceError> {
        let sanitized = self.sanitizer.sanitize(profile);
        let record = AssessmentRecord {
            id,
            profile: sanitized.profile,
            updated_at: Utc::now(),
        };

        let stored = self.repository.upsert(record)?;
        debug!(
            assessment_id = %stored.id,
            adjustments = sanitized.adjustments.len(),
            "assessment saved"
        );

        Ok(SavedAssessment {
            record: stored,
            adjustments: sanitized.adjustments,
        })
    }

    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Rank a profile that has not been stored. The profile is sanitized first.
    pub fn rank(
        &self,
        profile: AssessmentProfile,
        limit: Option<usize>,
    ) -> Vec<RankedArchetype<'_>> {
        let sanitized = self.sanitizer.sanitize(profile);
        self.engine.rank(&sanitized.profile, self.resolve_limit(limit))
    }

    pub fn rank_saved(
        &self,
        id: &AssessmentId,
        limit: Option<usize>,
    ) -> Result<Vec<RankedArchetype<'_>>, AssessmentServiceError> {
        let record = self.get(id)?;
        Ok(self.engine.rank(&record.profile, self.resolve_limit(limit)))
    }

    pub fn summary(&self, profile: AssessmentProfile) -> ProfileSummary {
        let sanitized = self.sanitizer.sanitize(profile);
        ProfileSummary::from_profile(&sanitized.profile)
    }

    /// An explicit `0` asks for the whole catalog; no request falls back to the
    /// configured default.
    fn resolve_limit(&self, requested: Option<usize>) -> Option<usize> {
        match requested {
            Some(0) => None,
            Some(limit) => Some(limit),
            None => self.default_limit,
        }
    }

    pub fn archetypes(&self) -> &[ArchetypeDefinition] {
        self.engine.catalog().list_archetypes()
    }

    /// Catalog entry plus its suggested career paths, `None` for unknown ids.
    pub fn archetype(&self, archetype_id: &str) -> Option<ArchetypeDetail<'_>> {
        let archetype = self.engine.catalog().get(archetype_id)?;
        Some(ArchetypeDetail {
            archetype,
            career_paths: career_paths(archetype.id),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeDetail<'a> {
    #[serde(flatten)]
    pub archetype: &'a ArchetypeDefinition,
    pub career_paths: &'static [CareerPath],
}

/// A stored record plus whatever the sanitizer changed on the way in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAssessment {
    pub record: AssessmentRecord,
    pub adjustments: Vec<SanitizeAdjustment>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
