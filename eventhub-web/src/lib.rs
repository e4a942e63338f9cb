//! eventhub-web library - HTTP façade over the event catalogs
//!
//! Serves the listing, detail, voting, and ticketing flows as a JSON API
//! for the web front-end. Catalogs are immutable snapshots loaded at
//! startup; every handler reads, none write. Completed vote and ticket
//! actions terminate in a redirect carrying a fabricated transaction
//! reference.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use eventhub_common::models::{TicketingEvent, VotingEvent};
use eventhub_common::Catalog;

use crate::payment::MockPaymentGateway;

pub mod api;
pub mod payment;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Voting-domain catalog snapshot
    pub voting: Arc<Catalog<VotingEvent>>,
    /// Ticketing-domain catalog snapshot
    pub ticketing: Arc<Catalog<TicketingEvent>>,
    /// Simulated payment collaborator
    pub payments: MockPaymentGateway,
}

impl AppState {
    /// Create application state from catalog snapshots
    pub fn new(voting: Catalog<VotingEvent>, ticketing: Catalog<TicketingEvent>) -> Self {
        Self {
            voting: Arc::new(voting),
            ticketing: Arc::new(ticketing),
            payments: MockPaymentGateway::default(),
        }
    }
}

/// Build application router
///
/// The front-end runs on its own origin, so CORS is permissive; there is
/// no authentication anywhere in this system.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/events/voting", get(api::voting::list_events))
        .route("/api/events/voting/:event_code", get(api::voting::event_detail))
        .route(
            "/api/events/voting/:event_code/candidates/:candidate_id",
            get(api::voting::candidate_detail),
        )
        .route(
            "/api/events/voting/:event_code/candidates/:candidate_id/votes",
            post(api::checkout::cast_votes),
        )
        .route("/api/events/nominate", get(api::voting::nominate_lookup))
        .route("/api/votes/confirm/:reference", get(api::checkout::confirm_votes))
        .route("/api/events/ticketing", get(api::ticketing::list_events))
        .route("/api/events/ticketing/:event_code", get(api::ticketing::event_detail))
        .route(
            "/api/events/ticketing/:event_code/orders",
            post(api::checkout::order_tickets),
        )
        .route("/api/tickets/confirm/:reference", get(api::checkout::confirm_tickets))
        .merge(api::health::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
