use crate::error::AuthError;
use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity claim carried by both token kinds: who the token was issued
/// to. Field names match the wire payload the frontend already consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub user_id: i32,
    pub email: String,
}

/// Represents the claims encoded within a token.
///
/// `jti` is a fresh UUID per issuance. Without it, two tokens signed for the
/// same user within the same second are byte-identical, which would collide
/// on the refresh-token unique constraint and make "new token per login"
/// unobservable.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_id: i32,
    email: String,
    /// Expiration timestamp (seconds since epoch).
    exp: usize,
    jti: String,
}

/// Produces and verifies the two signed token kinds.
///
/// Access and refresh tokens are signed with distinct secrets, so a token of
/// one kind never verifies as the other. Both secrets and both lifetimes are
/// injected at construction rather than read from the environment at call
/// sites.
#[derive(Clone)]
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// The refresh lifetime, exposed so the service can stamp the persisted
    /// record with the same expiry the signature carries.
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Signs a short-lived access token for `payload`.
    pub fn sign_access(&self, payload: &TokenPayload) -> Result<String, AuthError> {
        self.sign(payload, self.access_ttl, &self.access_encoding)
    }

    /// Signs a refresh token for `payload`. The caller is responsible for
    /// persisting the returned string; validity at use-time is governed by
    /// the persisted record as well as the embedded expiry.
    pub fn sign_refresh(&self, payload: &TokenPayload) -> Result<String, AuthError> {
        self.sign(payload, self.refresh_ttl, &self.refresh_encoding)
    }

    /// Verifies an access token statelessly: signature plus embedded expiry.
    /// This is the identity-extraction step resource handlers run on every
    /// request.
    pub fn verify_access(&self, token: &str) -> Result<TokenPayload, AuthError> {
        self.verify(token, &self.access_decoding)
    }

    /// Verifies a refresh token's signature and embedded expiry. Persisted
    /// state is checked separately by the refresh operation.
    pub fn verify_refresh(&self, token: &str) -> Result<TokenPayload, AuthError> {
        self.verify(token, &self.refresh_decoding)
    }

    fn sign(
        &self,
        payload: &TokenPayload,
        ttl: Duration,
        key: &EncodingKey,
    ) -> Result<String, AuthError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(ttl)
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            user_id: payload.user_id,
            email: payload.email.clone(),
            exp: expiration,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {}", e)))
    }

    fn verify(&self, token: &str, key: &DecodingKey) -> Result<TokenPayload, AuthError> {
        let data = decode::<Claims>(token, key, &Validation::default())?;
        Ok(TokenPayload {
            user_id: data.claims.user_id,
            email: data.claims.email,
        })
    }
}
