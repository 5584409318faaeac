//! Response DTOs for the profile cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Success envelope used by the debug endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Always true; failures use [`ErrorResponse`]
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a success envelope
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }
}

/// Payload of GET /api/debug/cache-stats
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsData {
    pub cache: CacheStats,
    /// Snapshot time in ISO 8601 format
    pub timestamp: String,
    pub message: String,
}

impl CacheStatsData {
    pub fn new(cache: CacheStats) -> Self {
        Self {
            cache,
            timestamp: chrono::Utc::now().to_rfc3339(),
            message: "Cache statistics retrieved successfully".to_string(),
        }
    }
}

/// Response body for DELETE /api/users/:id/cache
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// The user whose entry was dropped
    pub user_id: String,
}

impl InvalidateResponse {
    pub fn new(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        Self {
            message: format!("Cache for user '{}' invalidated", user_id),
            user_id,
        }
    }
}

/// Response body for DELETE /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped, expired ones included
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cache entries", cleared),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
