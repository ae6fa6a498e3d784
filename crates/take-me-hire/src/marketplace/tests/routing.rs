use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::marketplace::router::{
    candidate_router, create_handler, detail_handler, search_handler, SearchQuery,
};
use crate::error::AppError;
use crate::marketplace::domain::Availability;
use crate::marketplace::form::SubmitError;
use crate::marketplace::storage::MemoryKeyValueStore;

#[tokio::test]
async fn search_route_filters_by_query_string() {
    let router = candidate_router(shared_store());

    let response = router
        .oneshot(
            Request::get("/api/v1/candidates?location=whang%C4%81rei&verified_only=true")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 2);
    assert_eq!(payload["heading"], "Matching Candidates (2)");
    assert_eq!(payload["cards"][0]["id"], "seed-1");
    assert_eq!(payload["cards"][1]["id"], "seed-3");
}

#[tokio::test]
async fn search_handler_rejects_unknown_availability() {
    let query = SearchQuery {
        availability: Some("weekends".to_string()),
        ..SearchQuery::default()
    };
    let response = search_handler::<MemoryKeyValueStore>(State(shared_store()), Query(query))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("weekends")));
}

#[tokio::test]
async fn blank_availability_query_means_no_constraint() {
    let query = SearchQuery {
        availability: Some(String::new()),
        ..SearchQuery::default()
    };
    let response = search_handler::<MemoryKeyValueStore>(State(shared_store()), Query(query))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 3);
}

#[tokio::test]
async fn detail_handler_returns_card_or_not_found() {
    let store = shared_store();

    let found = detail_handler::<MemoryKeyValueStore>(
        State(store.clone()),
        Path("seed-2".to_string()),
    )
    .await;
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["name"], "James Walker");
    assert_eq!(payload["availability"], "Part-time");

    let missing =
        detail_handler::<MemoryKeyValueStore>(State(store), Path("nobody".to_string())).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_route_adds_profile_to_the_front() {
    let store = shared_store();
    let router = candidate_router(store.clone());

    let body = json!({
        "name": "A B",
        "title": "Clerk",
        "location": "Auckland",
        "availability": "Contract",
        "skills": "Payroll, Xero, , HRIS",
        "bio": "",
        "verified": false,
    });
    let response = router
        .oneshot(
            Request::post("/api/v1/profiles")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["skills"], json!(["Payroll", "Xero", "HRIS"]));
    assert!(payload.get("bio").is_none());

    let guard = store.lock().expect("store mutex poisoned");
    assert_eq!(guard.len(), 4);
    assert_eq!(guard.candidates()[0].id.as_str(), payload["id"]);
}

#[tokio::test]
async fn create_handler_returns_unprocessable_for_missing_fields() {
    let store = shared_store();
    let mut draft = complete_draft();
    draft.availability = None;

    let response = create_handler::<MemoryKeyValueStore>(State(store.clone()), axum::Json(draft))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["missing"], json!(["availability"]));
    assert_eq!(store.lock().expect("store mutex poisoned").len(), 3);
}

#[tokio::test]
async fn back_to_back_creates_get_distinct_ids() {
    let store = shared_store();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let response =
            create_handler::<MemoryKeyValueStore>(State(store.clone()), axum::Json(complete_draft()))
                .await
                .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = read_json_body(response).await;
        ids.push(payload["id"].as_str().expect("id is a string").to_string());
    }

    assert_ne!(ids[0], ids[1]);
    let guard = store.lock().expect("store mutex poisoned");
    assert_eq!(guard.len(), 5);
    assert_eq!(guard.candidates()[0].id.as_str(), ids[1]);
}

#[tokio::test]
async fn clashing_id_is_reported_as_conflict() {
    let store = shared_store();
    let rejection = {
        let mut guard = store.lock().expect("store mutex poisoned");
        guard
            .add(candidate("seed-2", "Clerk", "Auckland", Availability::Contract, false))
            .expect_err("seed-2 already stored")
    };

    let response = AppError::from(SubmitError::from(rejection)).into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert_eq!(payload["candidate_id"], "seed-2");
    assert_eq!(store.lock().expect("store mutex poisoned").len(), 3);
}

#[tokio::test]
async fn search_route_rejects_unknown_availability_with_shared_error_body() {
    let response = candidate_router(shared_store())
        .oneshot(
            Request::get("/api/v1/candidates?availability=weekends")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("invalid selection")));
}
