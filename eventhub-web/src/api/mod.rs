//! HTTP API handlers for eventhub-web

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub mod checkout;
pub mod health;
pub mod ticketing;
pub mod voting;

/// Errors surfaced by catalog endpoints.
///
/// Routine lookup misses map to 404 with a JSON error body; malformed
/// requests map to 400. Handlers never panic on a miss.
#[derive(Debug)]
pub enum ApiError {
    EventNotFound(String),
    CandidateNotFound {
        event_code: String,
        candidate_id: String,
    },
    UnknownTicketType {
        event_code: String,
        ticket_type: String,
    },
    InvalidQuantity(u32),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::EventNotFound(code) => {
                (StatusCode::NOT_FOUND, format!("Event not found: {}", code))
            }
            ApiError::CandidateNotFound {
                event_code,
                candidate_id,
            } => (
                StatusCode::NOT_FOUND,
                format!("Candidate {} not found in event {}", candidate_id, event_code),
            ),
            ApiError::UnknownTicketType {
                event_code,
                ticket_type,
            } => (
                StatusCode::BAD_REQUEST,
                format!("Unknown ticket type {:?} for event {}", ticket_type, event_code),
            ),
            ApiError::InvalidQuantity(quantity) => (
                StatusCode::BAD_REQUEST,
                format!("Quantity must be at least 1 (got {})", quantity),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
