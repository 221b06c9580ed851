//! Route definitions for the AgriPool server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/crops", crop_routes())
        .nest("/fertilizer", fertilizer_routes())
        .nest("/transport", transport_routes())
}

/// Crop advisory routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/score", post(handlers::score_crop))
        .route("/recommendations", post(handlers::recommend_crops))
}

/// Fertilizer planning routes
fn fertilizer_routes() -> Router<AppState> {
    Router::new()
        .route("/plans", post(handlers::create_fertilizer_plan))
        .route("/schedule/:season", get(handlers::get_application_schedule))
}

/// Transport matching routes
fn transport_routes() -> Router<AppState> {
    Router::new()
        .route("/offers/compatible", post(handlers::compatible_offers))
        .route("/matches", post(handlers::propose_match))
        .route("/matches/accept", post(handlers::accept_match))
        .route("/matches/complete", post(handlers::complete_match))
}
