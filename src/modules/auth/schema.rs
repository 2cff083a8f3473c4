use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::UserType;

// =============================================================================
// SIGNUP
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub user_type: UserType,
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// =============================================================================
// SHARED SUCCESS ENVELOPE
// =============================================================================

/// Signup and login answer with the same envelope: public account fields
/// plus a freshly issued access token. The password hash never leaves the
/// database row.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: AuthUserData,
}

#[derive(Debug, Serialize)]
pub struct AuthUserData {
    pub id: String,
    pub email: String,
    pub user_type: UserType,
    pub token: String,
}
