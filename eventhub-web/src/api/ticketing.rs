//! Ticketing-domain endpoints: listing and detail

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use eventhub_common::models::{TicketType, TicketingEvent};
use eventhub_common::query::{self, FilterSpec};

use crate::api::ApiError;
use crate::AppState;

/// Shown when a ticketing event has no description of its own. Applied
/// at render time; the catalog record keeps its `None`.
pub const DESCRIPTION_PLACEHOLDER: &str = "Join us for an unforgettable experience. This event \
    brings together the best talent and atmosphere in Ghana. Don't miss out on what promises to \
    be the highlight of the year.";

/// Listing entry for the ticketing browse page
#[derive(Debug, Serialize)]
pub struct TicketingEventSummary {
    pub id: u32,
    pub event_code: String,
    pub title: String,
    pub category: String,
    pub venue: String,
    pub date: String,
    pub image: String,
    /// First ticket tier's price ("starting from")
    pub starting_price: f64,
}

impl From<&TicketingEvent> for TicketingEventSummary {
    fn from(event: &TicketingEvent) -> Self {
        Self {
            id: event.id,
            event_code: event.event_code.clone(),
            title: event.title.clone(),
            category: event.category.clone(),
            venue: event.venue.clone(),
            date: event.date.clone(),
            image: event.image.clone(),
            // The catalog rejects records with no tiers at load
            starting_price: event.starting_price().unwrap_or_default(),
        }
    }
}

/// Listing response
#[derive(Debug, Serialize)]
pub struct TicketingListResponse {
    pub total: usize,
    pub events: Vec<TicketingEventSummary>,
}

/// Detail response, with the description placeholder applied
#[derive(Debug, Serialize)]
pub struct TicketingEventDetail {
    pub id: u32,
    pub event_code: String,
    pub title: String,
    pub category: String,
    pub venue: String,
    pub date: String,
    pub image: String,
    pub description: String,
    pub ticket_types: Vec<TicketType>,
}

impl From<&TicketingEvent> for TicketingEventDetail {
    fn from(event: &TicketingEvent) -> Self {
        Self {
            id: event.id,
            event_code: event.event_code.clone(),
            title: event.title.clone(),
            category: event.category.clone(),
            venue: event.venue.clone(),
            date: event.date.clone(),
            image: event.image.clone(),
            description: event
                .description
                .clone()
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
            ticket_types: event.ticket_types.clone(),
        }
    }
}

/// GET /api/events/ticketing?q=&category=
///
/// Filtered listing in catalog order; free text matches title and venue.
/// The ticketing domain has no status facet.
pub async fn list_events(
    State(state): State<AppState>,
    Query(spec): Query<FilterSpec>,
) -> Json<TicketingListResponse> {
    let events: Vec<TicketingEventSummary> = query::filter(state.ticketing.records(), &spec)
        .into_iter()
        .map(TicketingEventSummary::from)
        .collect();

    Json(TicketingListResponse {
        total: events.len(),
        events,
    })
}

/// GET /api/events/ticketing/:event_code
pub async fn event_detail(
    State(state): State<AppState>,
    Path(event_code): Path<String>,
) -> Result<Json<TicketingEventDetail>, ApiError> {
    state
        .ticketing
        .find_by_code(&event_code)
        .map(|event| Json(TicketingEventDetail::from(event)))
        .ok_or(ApiError::EventNotFound(event_code))
}
