//! Profile Module
//!
//! Cache-backed access to the reporting application's user profiles.
//!
//! The upstream "current user" endpoint is reached through [`ProfileSource`];
//! [`ProfileService`] puts an [`ExpiringCache`](crate::cache::ExpiringCache)
//! in front of it so repeated reads inside the TTL window cost no network
//! call.

mod model;
mod service;
mod source;

pub use model::UserProfile;
pub use service::{ProfileService, USER_KEY_PREFIX};
pub use source::{HttpProfileSource, ProfileSource, USER_ID_HEADER};
