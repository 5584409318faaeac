//! Profile Cache - user profile cache for the clinical reporting application
//!
//! Serves the "current user" profile through an in-memory cache with a fixed
//! TTL so dashboards and profile pages do not hit the upstream endpoint on
//! every read.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod profile;

pub use api::AppState;
pub use config::Config;
pub use profile::{ProfileService, UserProfile};
