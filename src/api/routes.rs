//! API Routes
//!
//! Configures the Axum router with all profile cache endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_handler, get_profile_handler, health_handler,
    invalidate_handler, not_found_handler, update_profile_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/users/:id/profile` - Cached profile lookup
/// - `PUT /api/users/:id/profile` - Update profile and invalidate its entry
/// - `DELETE /api/users/:id/cache` - Invalidate one user's entry
/// - `DELETE /api/cache` - Clear the cache
/// - `GET /api/debug/cache-stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/users/:id/profile",
            get(get_profile_handler).put(update_profile_handler),
        )
        .route("/api/users/:id/cache", delete(invalidate_handler))
        .route("/api/cache", delete(clear_handler))
        .route("/api/debug/cache-stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
