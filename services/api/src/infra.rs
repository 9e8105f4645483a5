use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use youlement::assessment::{
    standard_archetypes, ArchetypeCatalog, ArchetypeDefinition, AssessmentId, AssessmentProfile,
    AssessmentRecord, AssessmentRepository, KeywordMatcher, MatchingEngine, RepositoryError,
};
use youlement::config::MatchingConfig;
use youlement::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl InMemoryAssessmentRepository {
    fn records(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<AssessmentId, AssessmentRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn upsert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records()?;
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records()?;
        Ok(guard.get(id).cloned())
    }
}

/// Engine over the standard catalog; the catalog is validated before use.
pub(crate) fn matching_engine(config: &MatchingConfig) -> Result<MatchingEngine, AppError> {
    engine_for_catalog(standard_archetypes(), config)
}

fn engine_for_catalog(
    archetypes: Vec<ArchetypeDefinition>,
    config: &MatchingConfig,
) -> Result<MatchingEngine, AppError> {
    let catalog = ArchetypeCatalog::new(archetypes)?;
    Ok(MatchingEngine::new(Arc::new(catalog)).with_matcher(config.mode))
}

pub(crate) fn parse_matcher(raw: &str) -> Result<KeywordMatcher, String> {
    raw.parse()
}

pub(crate) fn load_profile(path: &Path) -> Result<AssessmentProfile, AppError> {
    let raw = fs::read_to_string(path)?;
    let profile = serde_json::from_str(&raw)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use youlement::assessment::CatalogError;

    #[test]
    fn repository_upserts_by_id() {
        let repository = InMemoryAssessmentRepository::default();
        let id = AssessmentId("demo".to_string());

        for value in ["Learning", "Service"] {
            repository
                .upsert(AssessmentRecord {
                    id: id.clone(),
                    profile: AssessmentProfile::builder().value(value).build(),
                    updated_at: Utc::now(),
                })
                .expect("upsert succeeds");
        }

        let stored = repository
            .fetch(&id)
            .expect("fetch succeeds")
            .expect("record present");
        assert_eq!(stored.profile.values.top5, vec!["Service"]);
        assert!(repository
            .fetch(&AssessmentId("other".to_string()))
            .expect("fetch succeeds")
            .is_none());
    }

    #[test]
    fn matching_engine_uses_validated_standard_catalog() {
        let config = MatchingConfig {
            mode: KeywordMatcher::WholeWord,
            ..MatchingConfig::default()
        };

        let engine = matching_engine(&config).expect("standard catalog is valid");

        assert_eq!(engine.catalog().len(), 9);
        assert_eq!(engine.matcher(), KeywordMatcher::WholeWord);
    }

    #[test]
    fn duplicate_archetype_ids_stop_engine_construction() {
        let mut archetypes = standard_archetypes();
        let mut copy = archetypes
            .iter()
            .find(|archetype| archetype.id == "builder")
            .cloned()
            .expect("builder archetype");
        copy.name = "Second Builder";
        archetypes.push(copy);

        let error = engine_for_catalog(archetypes, &MatchingConfig::default())
            .expect_err("duplicate id rejected");

        assert!(matches!(
            &error,
            AppError::Catalog(CatalogError::DuplicateId(id)) if id == "builder"
        ));
        assert_eq!(error.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_matcher_accepts_cli_spellings() {
        assert_eq!(parse_matcher("whole-word"), Ok(KeywordMatcher::WholeWord));
        assert_eq!(parse_matcher("containment"), Ok(KeywordMatcher::Containment));
        assert!(parse_matcher("fuzzy").is_err());
    }

    #[test]
    fn load_profile_reports_invalid_json() {
        let path = std::env::temp_dir().join("youlement-invalid-profile.json");
        fs::write(&path, "{ not json").expect("write temp file");

        let error = load_profile(&path).expect_err("invalid json rejected");
        assert!(matches!(error, AppError::Json(_)));

        fs::remove_file(&path).ok();
    }
}
