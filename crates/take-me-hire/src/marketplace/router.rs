use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::domain::{Availability, CandidateId, UnknownAvailability};
use super::filter::FilterCriteria;
use super::form::{ProfileDraft, ProfileForm};
use super::shell::{employer_dashboard, CandidateCard, EmployerDashboard};
use super::storage::KeyValueStore;
use super::store::CandidateStore;
use crate::error::AppError;

/// Store handle shared by the HTTP handlers. Handlers hold the lock only across synchronous
/// store calls, so mutations stay serialized.
pub type SharedCandidateStore<S> = Arc<Mutex<CandidateStore<S>>>;

/// Router builder exposing the employer search and the profile intake over HTTP.
pub fn candidate_router<S>(store: SharedCandidateStore<S>) -> Router
where
    S: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/candidates", get(search_handler::<S>))
        .route(
            "/api/v1/candidates/:candidate_id",
            get(detail_handler::<S>),
        )
        .route("/api/v1/profiles", post(create_handler::<S>))
        .with_state(store)
}

fn lock<S>(store: &SharedCandidateStore<S>) -> MutexGuard<'_, CandidateStore<S>> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Query string accepted by the employer search.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub verified_only: Option<bool>,
}

impl SearchQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria, UnknownAvailability> {
        let availability = match self.availability.as_deref() {
            Some(raw) => Availability::parse_selection(raw)?,
            None => None,
        };
        Ok(FilterCriteria {
            title: self.title.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            availability,
            verified_only: self.verified_only.unwrap_or(false),
        })
    }
}

pub(crate) async fn search_handler<S>(
    State(store): State<SharedCandidateStore<S>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<EmployerDashboard>, AppError>
where
    S: KeyValueStore + 'static,
{
    let criteria = query.into_criteria()?;
    let guard = lock(&store);
    Ok(Json(employer_dashboard(guard.candidates(), &criteria)))
}

pub(crate) async fn detail_handler<S>(
    State(store): State<SharedCandidateStore<S>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    let id = CandidateId(candidate_id);
    let card = lock(&store).get(&id).map(CandidateCard::from);
    match card {
        Some(card) => (StatusCode::OK, Json(card)).into_response(),
        None => {
            let payload = json!({
                "candidate_id": id.0,
                "error": "candidate not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn create_handler<S>(
    State(store): State<SharedCandidateStore<S>>,
    Json(draft): Json<ProfileDraft>,
) -> Result<(StatusCode, Json<CandidateCard>), AppError>
where
    S: KeyValueStore + 'static,
{
    let mut form = ProfileForm::new();
    *form.draft_mut() = draft;

    // The file backend fsyncs and renames inside `add`.
    let candidate = tokio::task::spawn_blocking(move || {
        let mut guard = lock(&store);
        form.submit(&mut *guard)
    })
    .await
    .map_err(axum::Error::new)??;

    info!(id = %candidate.id, "profile created over http");
    Ok((StatusCode::CREATED, Json(CandidateCard::from(&candidate))))
}
