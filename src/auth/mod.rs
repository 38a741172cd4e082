pub mod password;
pub mod service;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::user::PublicUser;

// Re-export necessary items
pub use password::PasswordHasher;
pub use service::AuthService;
pub use token::{TokenCodec, TokenPayload};

/// Validator rule for display names: non-empty once surrounding whitespace
/// is stripped. The service stores the trimmed form.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    Ok(())
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Display name for the new account.
    /// Must be non-empty after trimming.
    #[validate(custom = "validate_name")]
    pub name: String,
}

/// Represents the payload for a user login request.
///
/// Unlike registration, the password is only required to be present: a short
/// wrong password must fail authentication, not validation.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address.
    #[validate(email)]
    pub email: String,
    /// User's password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Represents the payload for a password reset request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,
    /// Replacement password, same length rule as registration.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Response structure after successful authentication (login or registration).
///
/// Carries both tokens and the public view of the authenticated user.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Short-lived signed claim used by resource handlers.
    pub access_token: String,
    /// Longer-lived opaque credential, persisted server-side.
    pub refresh_token: String,
    /// The authenticated user, without the password hash.
    pub user: PublicUser,
}

/// Response structure for a successful token refresh: a new access token
/// only. The refresh token is not rotated.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}
