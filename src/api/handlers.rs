//! API Handlers
//!
//! HTTP request handlers for each profile cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, FetchError, Result};
use crate::models::{
    validate_user_id, ApiResponse, CacheStatsData, ClearResponse, HealthResponse,
    InvalidateResponse, UpdateProfileRequest,
};
use crate::profile::{HttpProfileSource, ProfileService, UserProfile};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-backed profile access
    pub profiles: ProfileService,
}

impl AppState {
    /// Creates a new AppState around the given profile service.
    pub fn new(profiles: ProfileService) -> Self {
        Self { profiles }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP profile source and a cache with the configured TTL.
    pub fn from_config(config: &Config) -> std::result::Result<Self, FetchError> {
        let source = HttpProfileSource::from_config(config)?;
        Ok(Self::new(ProfileService::new(
            Arc::new(source),
            config.cache_ttl_duration(),
        )))
    }
}

fn check_user_id(user_id: &str) -> Result<()> {
    match validate_user_id(user_id) {
        Some(error_msg) => Err(AppError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

/// Handler for GET /api/users/:id/profile
///
/// Serves the profile from cache, fetching upstream on a miss.
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>> {
    check_user_id(&user_id)?;

    let profile = state.profiles.try_fetch_with_cache(&user_id).await?;
    Ok(Json(profile))
}

/// Handler for PUT /api/users/:id/profile
///
/// Forwards the update upstream and invalidates the cached profile.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>> {
    check_user_id(&user_id)?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let profile = state.profiles.update_profile(&user_id, &req).await?;
    Ok(Json(profile))
}

/// Handler for DELETE /api/users/:id/cache
///
/// Idempotent: invalidating a user with no cached entry succeeds.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    check_user_id(&user_id)?;

    state.profiles.invalidate_user_cache(&user_id).await;
    Ok(Json(InvalidateResponse::new(user_id)))
}

/// Handler for DELETE /api/cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.profiles.clear_cache().await;
    info!(cleared, "profile cache cleared");

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /api/debug/cache-stats
pub async fn cache_stats_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<CacheStatsData>> {
    let stats = state.profiles.cache_stats().await;
    Json(ApiResponse::ok(CacheStatsData::new(stats)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unknown routes
pub async fn not_found_handler() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
