use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::profile::AssessmentProfile;
use super::repository::{AssessmentId, AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Optional `?limit=N`; `0` returns every archetype.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

/// Router builder exposing the catalog, ad-hoc matching, and stored assessments.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/archetypes", get(list_archetypes_handler::<R>))
        .route(
            "/api/v1/archetypes/:archetype_id",
            get(archetype_handler::<R>),
        )
        .route("/api/v1/matches", post(match_handler::<R>))
        .route("/api/v1/summary", post(summary_handler::<R>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(assessment_handler::<R>).put(save_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/matches",
            get(saved_matches_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_archetypes_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.archetypes())).into_response()
}

pub(crate) async fn archetype_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(archetype_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.archetype(&archetype_id) {
        Some(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        None => {
            warn!(%archetype_id, "unknown archetype requested");
            let payload = json!({
                "error": format!("archetype '{archetype_id}' not found"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn match_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(query): Query<LimitQuery>,
    axum::Json(profile): axum::Json<AssessmentProfile>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let ranked = service.rank(profile, query.limit);
    (StatusCode::OK, axum::Json(ranked)).into_response()
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(profile): axum::Json<AssessmentProfile>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.summary(profile))).into_response()
}

pub(crate) async fn save_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
    axum::Json(profile): axum::Json<AssessmentProfile>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.save(AssessmentId(assessment_id), profile) {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assessment_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.get(&AssessmentId(assessment_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn saved_matches_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.rank_saved(&AssessmentId(assessment_id), query.limit) {
        Ok(ranked) => (StatusCode::OK, axum::Json(ranked)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    warn!(%error, status = status.as_u16(), "assessment request rejected");
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
