//! Route handlers for the Roomie API.

pub mod agreements;
pub mod health;
pub mod matches;
pub mod mediation;
pub mod onboarding;
pub mod rooms;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/onboarding", post(onboarding::onboard))
        .route("/api/rooms", post(rooms::create_room))
        .route("/api/matches", post(matches::create_matches))
        .route("/api/agreements", post(agreements::draft_agreement))
        .route("/api/mediation", post(mediation::mediate))
}
