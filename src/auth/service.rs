//! The auth core: orchestrates registration, login, refresh, logout and
//! password reset over the injected store, hasher and codec.

use chrono::Utc;
use log::{info, warn};
use validator::Validate;

use crate::auth::password::PasswordHasher;
use crate::auth::token::{TokenCodec, TokenPayload};
use crate::auth::{
    AuthResponse, LoginRequest, RefreshResponse, RegisterRequest, ResetPasswordRequest,
};
use crate::error::AuthError;
use crate::models::user::User;
use crate::store::CredentialStore;

/// The authentication service.
///
/// Holds no mutable state of its own; the store is the single source of
/// truth and every operation is an independent round-trip to it. Safe to
/// share across concurrently handled requests.
pub struct AuthService<S> {
    store: S,
    hasher: PasswordHasher,
    codec: TokenCodec,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(store: S, hasher: PasswordHasher, codec: TokenCodec) -> Self {
        Self {
            store,
            hasher,
            codec,
        }
    }

    /// Registers a new account and opens its first session.
    ///
    /// Rejects duplicate emails with [`AuthError::Conflict`] before any
    /// mutation. On success the new user gets an access/refresh token pair,
    /// with the refresh token persisted for later exchange.
    ///
    /// User creation and token persistence are two separate store writes; a
    /// failure between them leaves a valid user with no session token, and
    /// the caller simply logs in to recover. There is no compensating
    /// rollback.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        request.validate()?;
        let name = request.name.trim();

        if self
            .store
            .find_user_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AuthError::Conflict(
                "User with this email already exists".into(),
            ));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .store
            .create_user(&request.email, &password_hash, name)
            .await?;

        info!("Registered new user: {}", user.email);
        self.issue_session(&user).await
    }

    /// Authenticates an existing account and opens a new session.
    ///
    /// An unknown email and a wrong password produce the same error, so a
    /// caller cannot probe which addresses are registered. Prior sessions
    /// on other devices are left untouched.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let user = match self.store.find_user_by_email(&request.email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt failed: user not found for {}", request.email);
                return Err(invalid_credentials());
            }
        };

        if !self.hasher.compare(&request.password, &user.password_hash)? {
            warn!("Login attempt failed: invalid password for {}", request.email);
            return Err(invalid_credentials());
        }

        info!("Login successful for user: {}", user.email);
        self.issue_session(&user).await
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// Both the token's own signature/expiry and the persisted record's
    /// expiry are authoritative; either failing rejects the exchange. The
    /// refresh token itself is not rotated — it stays valid until logout,
    /// reset or expiry.
    pub async fn refresh(
        &self,
        refresh_token: Option<&str>,
    ) -> Result<RefreshResponse, AuthError> {
        let refresh_token = refresh_token
            .ok_or_else(|| AuthError::Validation("Refresh token is required".into()))?;

        let payload = self.codec.verify_refresh(refresh_token)?;

        // A deleted record and a never-issued token must be
        // indistinguishable, so both paths share one error.
        let record = self
            .store
            .find_refresh_token(refresh_token)
            .await?
            .ok_or_else(stale_refresh_token)?;
        if record.expires_at < Utc::now() {
            return Err(stale_refresh_token());
        }

        let access_token = self.codec.sign_access(&payload)?;
        Ok(RefreshResponse { access_token })
    }

    /// Revokes a session by deleting its persisted refresh token.
    ///
    /// Idempotent: an absent token or an already-deleted record is not an
    /// error, so a client can always log out safely.
    pub async fn logout(&self, refresh_token: Option<&str>) -> Result<(), AuthError> {
        if let Some(token) = refresh_token {
            let deleted = self.store.delete_refresh_tokens_by_token(token).await?;
            info!("Logout removed {} refresh token record(s)", deleted);
        }
        Ok(())
    }

    /// Replaces an account's password and revokes every open session.
    ///
    /// This is the one operation that invalidates other devices: every
    /// refresh token the user owns is deleted, forcing a fresh login
    /// everywhere with the new password.
    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<(), AuthError> {
        request.validate()?;

        let user = self
            .store
            .find_user_by_email(&request.email)
            .await?
            .ok_or_else(|| AuthError::NotFound("User not found".into()))?;

        let new_hash = self.hasher.hash(&request.new_password)?;
        self.store.update_user_password(user.id, &new_hash).await?;

        let revoked = self.store.delete_refresh_tokens_by_user(user.id).await?;
        info!(
            "Password reset for {} revoked {} session(s)",
            user.email, revoked
        );
        Ok(())
    }

    /// The per-request identity check downstream handlers run: statelessly
    /// verifies an access token and yields the identity it proves.
    pub fn verify_access(&self, access_token: &str) -> Result<TokenPayload, AuthError> {
        self.codec.verify_access(access_token)
    }

    /// Mints an access/refresh pair for `user` and persists the refresh
    /// token with the same lifetime its signature carries.
    async fn issue_session(&self, user: &User) -> Result<AuthResponse, AuthError> {
        let payload = TokenPayload {
            user_id: user.id,
            email: user.email.clone(),
        };

        let access_token = self.codec.sign_access(&payload)?;
        let refresh_token = self.codec.sign_refresh(&payload)?;

        let expires_at = Utc::now() + self.codec.refresh_ttl();
        self.store
            .create_refresh_token(&refresh_token, user.id, expires_at)
            .await?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            user: user.public(),
        })
    }
}

fn invalid_credentials() -> AuthError {
    AuthError::Authentication("Invalid email or password".into())
}

fn stale_refresh_token() -> AuthError {
    AuthError::Authentication("Invalid or expired refresh token".into())
}
