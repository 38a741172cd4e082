use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record as stored by the credential store.
///
/// The password hash never leaves the crate; operations return a
/// [`PublicUser`] instead.
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The subset of this record that is safe to return to clients.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// The client-facing view of a user: id, email and display name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// A persisted refresh token.
///
/// A record exists exactly while the token has been issued and not yet
/// revoked. `expires_at` is checked at use-time by the refresh operation;
/// nothing prunes stale rows in the background.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshTokenRecord {
    pub token: String,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}
