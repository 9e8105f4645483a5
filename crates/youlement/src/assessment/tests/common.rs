use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::profile::{AssessmentProfile, DreamJobVision, LifeArea};
use crate::assessment::repository::{
    AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError,
};
use crate::assessment::{assessment_router, AssessmentService, MatchingEngine};

/// A researcher-leaning profile that ranks the synthesizer first.
pub(super) fn researcher_profile() -> AssessmentProfile {
    AssessmentProfile::builder()
        .values(["Innovation", "Learning", "Freedom"])
        .work_task("researching", 3)
        .work_task("analyzing", 2)
        .work_task("filing", -2)
        .work_strengths(Some("research"), ["analytical", "strategic"])
        .test_strength("synthesis")
        .friend_strengths(Some("Sam"), ["curious"])
        .ranked_requirement("flexibility", 1, 2)
        .ranked_requirement("learning opportunities", 2, 1)
        .life_area(LifeArea::Career, 1)
        .life_area(LifeArea::Health, 3)
        .select_archetype("synthesizer")
        .vision(DreamJobVision {
            doing: "Connecting research to strategy".to_string(),
            with_whom: "Small cross-functional teams".to_string(),
            how: "Remote, self-directed".to_string(),
            why: "To make complex ideas usable".to_string(),
        })
        .build()
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), MatchingEngine::standard())
        .with_default_limit(Some(3));
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn upsert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn upsert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}
