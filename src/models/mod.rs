//! Request and Response models for the profile cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{validate_user_id, UpdateProfileRequest, MAX_USER_ID_LENGTH};
pub use responses::{
    ApiResponse, CacheStatsData, ClearResponse, ErrorResponse, HealthResponse,
    InvalidateResponse,
};
