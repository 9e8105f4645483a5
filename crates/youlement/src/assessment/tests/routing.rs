use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::assessment::{AssessmentService, MatchingEngine};

fn json_request(method: &str, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request")
}

#[tokio::test]
async fn archetype_listing_returns_full_catalog() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/archetypes")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let archetypes = body.as_array().expect("array payload");
    assert_eq!(archetypes.len(), 9);
    assert_eq!(archetypes[0]["id"], "synthesizer");
    assert!(archetypes[0]["energizingTasks"].is_array());
}

#[tokio::test]
async fn archetype_detail_route_includes_career_paths() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/archetypes/explorer")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["id"], "explorer");
    assert!(body["careerPaths"][0]["title"].is_string());
}

#[tokio::test]
async fn unknown_archetype_returns_not_found() {
    let (service, _) = build_service();

    let response = crate::assessment::router::archetype_handler::<MemoryRepository>(
        State(Arc::new(service)),
        Path("astronaut".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "archetype 'astronaut' not found");
}

#[tokio::test]
async fn match_route_ranks_posted_profile_with_limit() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/matches?limit=2",
            &researcher_profile(),
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let ranked = body.as_array().expect("array payload");
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["archetype"]["id"], "synthesizer");
    assert_eq!(ranked[0]["match"]["score"], 62);
    assert_eq!(ranked[0]["match"]["breakdown"]["selfSelected"], 100);
}

#[tokio::test]
async fn summary_route_reports_life_balance() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request("POST", "/api/v1/summary", &researcher_profile()))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    // (1 + 3) / 8
    assert_eq!(body["lifeBalanceScore"], 0.5);
    assert_eq!(body["primaryArchetype"], "synthesizer");
    assert_eq!(body["energyBalance"]["total"], 3);
}

#[tokio::test]
async fn summary_route_accepts_wizard_payload_shape() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let payload = serde_json::json!({
        "values": { "top5": ["Innovation"] },
        "strengths": {
            "fromWork": [{ "taskId": 3, "taskName": "researching", "strengths": ["analytical"] }]
        },
        "wheelOfLife": { "career": 3, "health": 0, "justifications": {} },
        "fiveWhyProblems": [{
            "id": 1718000000000u64,
            "problem": "Scattered priorities",
            "category": "work",
            "whys": ["Too many asks", "", "", "", ""],
            "rootCause": "No intake process",
            "nextStep": "Set up a weekly triage"
        }]
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/summary", &payload))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    // 3 / 8 = 0.375
    assert_eq!(body["lifeBalanceScore"], 0.4);
    assert_eq!(body["topStrengths"][0], "analytical");
    assert_eq!(body["topProblems"][0]["rootCause"], "No intake process");
    assert_eq!(body["topProblems"][0]["nextStep"], "Set up a weekly triage");
}

#[tokio::test]
async fn stored_assessment_round_trips_through_routes() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/assessments/user-7",
            &researcher_profile(),
        ))
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    let saved = read_json_body(response).await;
    assert_eq!(saved["record"]["id"], "user-7");
    assert_eq!(saved["adjustments"].as_array().map(Vec::len), Some(0));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/assessments/user-7")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    let record = read_json_body(response).await;
    assert_eq!(record["profile"]["values"]["top5"][0], "Innovation");

    let response = router
        .oneshot(
            Request::get("/api/v1/assessments/user-7/matches")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    let ranked = read_json_body(response).await;
    assert_eq!(ranked.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn unknown_assessment_returns_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    for uri in [
        "/api/v1/assessments/nobody",
        "/api/v1/assessments/nobody/matches",
    ] {
        let response = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn save_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(UnavailableRepository),
        MatchingEngine::standard(),
    ));

    let response = crate::assessment::router::save_handler::<UnavailableRepository>(
        State(service),
        Path("user-1".to_string()),
        axum::Json(researcher_profile()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
