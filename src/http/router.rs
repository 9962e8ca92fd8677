//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Day schedule
        .route("/schedule/{date}", get(handlers::get_day_schedule))
        // Booking CRUD and queries
        .route("/bookings", get(handlers::list_bookings))
        .route("/bookings", post(handlers::create_booking))
        .route("/bookings/upcoming", get(handlers::upcoming_bookings))
        .route("/bookings/events", get(handlers::stream_booking_events))
        .route("/bookings/{id}", get(handlers::get_booking))
        .route("/bookings/{id}", delete(handlers::delete_booking))
        // Client directory
        .route("/clients", get(handlers::search_clients))
        // Reports
        .route("/reports/integrity", get(handlers::get_integrity_report));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
