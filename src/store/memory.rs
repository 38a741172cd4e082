use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::models::user::{RefreshTokenRecord, User};
use crate::store::CredentialStore;

/// In-process credential store used by the test suite.
///
/// Mirrors the Postgres store's constraints: unique emails (second create
/// conflicts) and exact-match token lookups. The mutexes are never held
/// across an await point.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: Mutex<HashMap<i32, User>>,
    tokens: Mutex<Vec<RefreshTokenRecord>>,
    next_id: Mutex<i32>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently persisted refresh tokens. Test-observability
    /// helper with no Postgres counterpart.
    pub fn refresh_token_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == email) {
            return Err(AuthError::Conflict("Record already exists".into()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let user = User {
            id: *next_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user_password(&self, user_id: i32, new_hash: &str) -> Result<(), AuthError> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&user_id) {
            Some(user) => {
                user.password_hash = new_hash.to_string();
                Ok(())
            }
            None => Err(AuthError::NotFound("Record not found".into())),
        }
    }

    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.iter().any(|t| t.token == token) {
            return Err(AuthError::Conflict("Record already exists".into()));
        }
        tokens.push(RefreshTokenRecord {
            token: token.to_string(),
            user_id,
            expires_at,
        });
        Ok(())
    }

    async fn find_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, AuthError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.iter().find(|t| t.token == token).cloned())
    }

    async fn delete_refresh_tokens_by_token(&self, token: &str) -> Result<u64, AuthError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| t.token != token);
        Ok((before - tokens.len()) as u64)
    }

    async fn delete_refresh_tokens_by_user(&self, user_id: i32) -> Result<u64, AuthError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| t.user_id != user_id);
        Ok((before - tokens.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryCredentialStore::new();
        store.create_user("a@x.com", "hash1", "Ann").await.unwrap();

        let err = store
            .create_user("a@x.com", "hash2", "Other Ann")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let store = MemoryCredentialStore::new();
        store.create_user("a@x.com", "hash", "Ann").await.unwrap();

        assert!(store.find_user_by_email("a@x.com").await.unwrap().is_some());
        assert!(store.find_user_by_email("A@X.COM").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_token_and_by_user() {
        let store = MemoryCredentialStore::new();
        let user = store.create_user("a@x.com", "hash", "Ann").await.unwrap();
        let expires = Utc::now() + Duration::days(7);

        store
            .create_refresh_token("tok-1", user.id, expires)
            .await
            .unwrap();
        store
            .create_refresh_token("tok-2", user.id, expires)
            .await
            .unwrap();
        assert_eq!(store.refresh_token_count(), 2);

        // Exact-match delete; a miss deletes zero rows without error.
        assert_eq!(
            store.delete_refresh_tokens_by_token("tok-1").await.unwrap(),
            1
        );
        assert_eq!(
            store
                .delete_refresh_tokens_by_token("tok-missing")
                .await
                .unwrap(),
            0
        );

        assert_eq!(
            store.delete_refresh_tokens_by_user(user.id).await.unwrap(),
            1
        );
        assert_eq!(store.refresh_token_count(), 0);
    }

    #[tokio::test]
    async fn test_update_password_rewrites_hash() {
        let store = MemoryCredentialStore::new();
        let user = store.create_user("a@x.com", "old", "Ann").await.unwrap();

        store.update_user_password(user.id, "new").await.unwrap();
        let reloaded = store
            .find_user_by_email("a@x.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.password_hash, "new");

        let err = store.update_user_password(9999, "new").await.unwrap_err();
        assert!(matches!(err, AuthError::NotFound(_)));
    }
}
