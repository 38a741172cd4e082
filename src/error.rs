//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AuthError` used throughout the
//! crate. It centralizes error management, providing a consistent way to
//! represent every failure an auth operation can report, from store problems
//! to validation failures.
//!
//! Each variant corresponds to one caller-visible error kind. The embedding
//! transport layer maps kinds to status codes; this crate never does.
//! `From` implementations are provided for common library error types
//! (`sqlx::Error`, `validator::ValidationErrors`, `jsonwebtoken::errors::Error`,
//! `bcrypt::BcryptError`) so operations can propagate them with `?`.

use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors an auth operation can fail with.
///
/// Every operation on [`crate::AuthService`] returns its success value or
/// exactly one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Malformed or missing input — the caller's fault. Field-level detail
    /// is safe to include in the message.
    Validation(String),
    /// A uniqueness conflict, in practice a duplicate email at registration.
    Conflict(String),
    /// Bad credentials or a bad/expired/missing token. The message is
    /// deliberately generic: it never says which check failed.
    Authentication(String),
    /// A requested entity does not exist.
    NotFound(String),
    /// A store, hasher or codec failure not attributable to caller input.
    Internal(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AuthError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AuthError::Authentication(msg) => write!(f, "Authentication Error: {}", msg),
            AuthError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AuthError::Internal(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Converts `sqlx::Error` into `AuthError`.
///
/// Unique-constraint violations (Postgres code 23505) become `Conflict` —
/// this is what makes concurrent registration of the same email safe without
/// any locking in the core. `RowNotFound` maps to `NotFound`; everything else
/// is a store failure and maps to `Internal`.
impl From<sqlx::Error> for AuthError {
    fn from(error: sqlx::Error) -> AuthError {
        match &error {
            sqlx::Error::RowNotFound => AuthError::NotFound("Record not found".into()),
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                AuthError::Conflict("Record already exists".into())
            }
            _ => AuthError::Internal(error.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AuthError::Validation`.
///
/// The detailed field-level messages are preserved.
impl From<ValidationErrors> for AuthError {
    fn from(error: ValidationErrors) -> AuthError {
        AuthError::Validation(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AuthError::Authentication`.
///
/// Signature, expiry and malformed-payload failures are collapsed into one
/// generic message; the distinction is not exposed across the trust boundary.
impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(_: jsonwebtoken::errors::Error) -> AuthError {
        AuthError::Authentication("Invalid or expired token".into())
    }
}

/// Converts `bcrypt::BcryptError` into `AuthError::Internal`.
///
/// Hashing or verification can only fail for reasons outside the caller's
/// control (bad cost, corrupt stored hash).
impl From<bcrypt::BcryptError> for AuthError {
    fn from(error: bcrypt::BcryptError) -> AuthError {
        AuthError::Internal(format!("Password hashing failed: {}", error))
    }
}
