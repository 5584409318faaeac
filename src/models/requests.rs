//! Request DTOs for the profile cache API
//!
//! Defines the structure of incoming HTTP request bodies and path checks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum allowed user id length in bytes
pub const MAX_USER_ID_LENGTH: usize = 256;

/// Request body for a profile update (PUT /api/users/:id/profile)
///
/// Forwarded unchanged to the upstream profile endpoint.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UpdateProfileRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Some("Name and email are required".to_string());
        }
        let changes_password = self.new_password.as_deref().is_some_and(|p| !p.is_empty());
        let has_current = self
            .current_password
            .as_deref()
            .is_some_and(|p| !p.is_empty());
        if changes_password && !has_current {
            return Some("Current password is required to change password".to_string());
        }
        None
    }
}

// Passwords stay out of logs
impl fmt::Debug for UpdateProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |p: &Option<String>| p.as_ref().map(|_| "<redacted>");
        f.debug_struct("UpdateProfileRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("license_number", &self.license_number)
            .field("institution_name", &self.institution_name)
            .field("institution_address", &self.institution_address)
            .field("institution_phone", &self.institution_phone)
            .field("current_password", &redact(&self.current_password))
            .field("new_password", &redact(&self.new_password))
            .finish()
    }
}

/// Validates a user id taken from the request path.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_user_id(user_id: &str) -> Option<String> {
    if user_id.trim().is_empty() {
        return Some("User id cannot be empty".to_string());
    }
    // Ids travel upstream in a header, which cannot carry control characters
    if user_id.chars().any(char::is_control) {
        return Some("User id cannot contain control characters".to_string());
    }
    if user_id.len() > MAX_USER_ID_LENGTH {
        return Some(format!(
            "User id exceeds maximum length of {} bytes",
            MAX_USER_ID_LENGTH
        ));
    }
    None
}
