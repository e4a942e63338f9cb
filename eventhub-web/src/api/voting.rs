//! Voting-domain endpoints: listing, detail, candidate lookup, nomination

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use eventhub_common::models::{Candidate, VotingEvent};
use eventhub_common::query::{self, FilterSpec};

use crate::api::ApiError;
use crate::AppState;

/// Listing entry for the voting browse page
#[derive(Debug, Serialize)]
pub struct VotingEventSummary {
    pub id: u32,
    pub event_code: String,
    pub title: String,
    pub category: String,
    pub status: String,
    pub date: String,
    pub image: String,
    pub location: String,
    pub vote_price: f64,
}

impl From<&VotingEvent> for VotingEventSummary {
    fn from(event: &VotingEvent) -> Self {
        Self {
            id: event.id,
            event_code: event.event_code.clone(),
            title: event.title.clone(),
            category: event.category.clone(),
            status: event.status.as_str().to_string(),
            date: event.date.clone(),
            image: event.image.clone(),
            location: event.location.clone(),
            vote_price: event.vote_price,
        }
    }
}

/// Listing response
#[derive(Debug, Serialize)]
pub struct VotingListResponse {
    pub total: usize,
    pub events: Vec<VotingEventSummary>,
}

/// GET /api/events/voting?q=&status=&category=
///
/// Filtered listing in catalog order. No matches is an empty list, not
/// an error; the front-end renders the empty state.
pub async fn list_events(
    State(state): State<AppState>,
    Query(spec): Query<FilterSpec>,
) -> Json<VotingListResponse> {
    let events: Vec<VotingEventSummary> = query::filter(state.voting.records(), &spec)
        .into_iter()
        .map(VotingEventSummary::from)
        .collect();

    Json(VotingListResponse {
        total: events.len(),
        events,
    })
}

/// GET /api/events/voting/:event_code
///
/// Full event detail, categories and candidates included. Stale and
/// mistyped codes are routine: 404.
pub async fn event_detail(
    State(state): State<AppState>,
    Path(event_code): Path<String>,
) -> Result<Json<VotingEvent>, ApiError> {
    state
        .voting
        .find_by_code(&event_code)
        .cloned()
        .map(Json)
        .ok_or(ApiError::EventNotFound(event_code))
}

/// Candidate lookup response: the candidate plus the event context the
/// vote page renders around it
#[derive(Debug, Serialize)]
pub struct CandidateResponse {
    pub event: VotingEventSummary,
    pub candidate: Candidate,
}

/// GET /api/events/voting/:event_code/candidates/:candidate_id
pub async fn candidate_detail(
    State(state): State<AppState>,
    Path((event_code, candidate_id)): Path<(String, String)>,
) -> Result<Json<CandidateResponse>, ApiError> {
    let (event, candidate) = state
        .voting
        .find_candidate(&event_code, &candidate_id)
        .ok_or(ApiError::CandidateNotFound {
            event_code,
            candidate_id,
        })?;

    Ok(Json(CandidateResponse {
        event: VotingEventSummary::from(event),
        candidate: candidate.clone(),
    }))
}

/// Query parameters for the nomination entry point
#[derive(Debug, Deserialize)]
pub struct NominateQuery {
    pub event_code: Option<String>,
}

/// GET /api/events/nominate?event_code=CODE
///
/// A missing code sends the caller back to the voting listing; an
/// unknown code is 404.
pub async fn nominate_lookup(
    State(state): State<AppState>,
    Query(query): Query<NominateQuery>,
) -> Response {
    let Some(event_code) = query.event_code.filter(|code| !code.is_empty()) else {
        return Redirect::temporary("/api/events/voting").into_response();
    };

    match state.voting.find_by_code(&event_code) {
        Some(event) => Json(event.clone()).into_response(),
        None => ApiError::EventNotFound(event_code).into_response(),
    }
}
