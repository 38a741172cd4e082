//! The credential store boundary.
//!
//! The auth core never talks to a database directly; it goes through the
//! [`CredentialStore`] trait. [`PgCredentialStore`] is the production
//! implementation, [`MemoryCredentialStore`] the in-process fake the test
//! suite runs against.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::models::user::{RefreshTokenRecord, User};

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

/// Persistence contract for user and refresh-token records.
///
/// The store is the single source of truth and serializes conflicting writes
/// itself: `create_user` must reject the second of two racing creates for the
/// same email with [`AuthError::Conflict`]. Email lookups are case-sensitive,
/// exactly as stored.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Creates a user record. Fails with [`AuthError::Conflict`] if the email
    /// is already taken.
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, AuthError>;

    async fn update_user_password(&self, user_id: i32, new_hash: &str) -> Result<(), AuthError>;

    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError>;

    async fn find_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, AuthError>;

    /// Deletes every record matching `token` exactly and returns how many
    /// were removed. Zero is not an error.
    async fn delete_refresh_tokens_by_token(&self, token: &str) -> Result<u64, AuthError>;

    /// Deletes every refresh token owned by `user_id` and returns how many
    /// were removed.
    async fn delete_refresh_tokens_by_user(&self, user_id: i32) -> Result<u64, AuthError>;
}
