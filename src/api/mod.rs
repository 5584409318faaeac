//! API Module
//!
//! HTTP handlers and routing for the profile cache REST API.
//!
//! # Endpoints
//! - `GET /api/users/:id/profile` - Cached profile lookup
//! - `PUT /api/users/:id/profile` - Update a profile
//! - `DELETE /api/users/:id/cache` - Invalidate one user's entry
//! - `DELETE /api/cache` - Clear the cache
//! - `GET /api/debug/cache-stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
