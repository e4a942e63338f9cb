//! Vote casting and ticket ordering
//!
//! Neither flow moves money: the mock gateway fabricates a reference and
//! the confirmation endpoints echo it back, display-only. A completed
//! action answers with 303 See Other, the reference riding in the
//! redirect target's final path segment.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

use eventhub_common::TransactionRef;

use crate::api::ApiError;
use crate::AppState;

fn default_quantity() -> u32 {
    1
}

/// Body of a vote request
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    /// Number of votes to cast; defaults to a single vote
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// POST /api/events/voting/:event_code/candidates/:candidate_id/votes
///
/// Resolves the candidate, simulates the charge (quantity x vote price),
/// and redirects to the vote confirmation carrying the reference.
pub async fn cast_votes(
    State(state): State<AppState>,
    Path((event_code, candidate_id)): Path<(String, String)>,
    Json(request): Json<VoteRequest>,
) -> Result<Redirect, ApiError> {
    if request.quantity < 1 {
        return Err(ApiError::InvalidQuantity(request.quantity));
    }

    let event = state
        .voting
        .find_by_code(&event_code)
        .ok_or_else(|| ApiError::EventNotFound(event_code.clone()))?;
    let candidate = event
        .find_candidate(&candidate_id)
        .ok_or_else(|| ApiError::CandidateNotFound {
            event_code: event_code.clone(),
            candidate_id: candidate_id.clone(),
        })?;

    let amount = event.vote_price * f64::from(request.quantity);
    let receipt = state.payments.charge(
        amount,
        &format!(
            "{} vote(s) for {} in {}",
            request.quantity, candidate.name, event.event_code
        ),
    );

    Ok(Redirect::to(&format!("/api/votes/confirm/{}", receipt.reference)))
}

/// Body of a ticket order request
#[derive(Debug, Deserialize)]
pub struct TicketOrderRequest {
    /// Tier name, exactly as listed on the event
    pub ticket_type: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// POST /api/events/ticketing/:event_code/orders
///
/// Resolves the event and tier, simulates the charge, and redirects to
/// the ticket confirmation carrying the reference.
pub async fn order_tickets(
    State(state): State<AppState>,
    Path(event_code): Path<String>,
    Json(request): Json<TicketOrderRequest>,
) -> Result<Redirect, ApiError> {
    if request.quantity < 1 {
        return Err(ApiError::InvalidQuantity(request.quantity));
    }

    let event = state
        .ticketing
        .find_by_code(&event_code)
        .ok_or_else(|| ApiError::EventNotFound(event_code.clone()))?;
    let tier = event
        .ticket_type(&request.ticket_type)
        .ok_or_else(|| ApiError::UnknownTicketType {
            event_code: event_code.clone(),
            ticket_type: request.ticket_type.clone(),
        })?;

    let amount = tier.price * f64::from(request.quantity);
    let receipt = state.payments.charge(
        amount,
        &format!(
            "{} x {} ticket(s) for {}",
            request.quantity, tier.name, event.event_code
        ),
    );

    Ok(Redirect::to(&format!("/api/tickets/confirm/{}", receipt.reference)))
}

/// Confirmation response echoing the reference from the redirect
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub reference: TransactionRef,
    pub message: String,
}

/// GET /api/votes/confirm/:reference
///
/// Echoes the reference back. The token is display-only; nothing is
/// looked up or verified.
pub async fn confirm_votes(Path(reference): Path<String>) -> Json<ConfirmationResponse> {
    Json(ConfirmationResponse {
        reference: TransactionRef::from_source(reference),
        message: "Your vote has been recorded.".to_string(),
    })
}

/// GET /api/tickets/confirm/:reference
pub async fn confirm_tickets(Path(reference): Path<String>) -> Json<ConfirmationResponse> {
    Json(ConfirmationResponse {
        reference: TransactionRef::from_source(reference),
        message: "Your tickets have been sent to your email.".to_string(),
    })
}
