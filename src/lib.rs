//! The `tasknest-auth` library crate.
//!
//! This crate contains the authentication core of the TaskNest application:
//! registration, login, token refresh, logout and password reset, plus the
//! token codec and password hashing it is built on. It is transport-agnostic;
//! every operation returns a plain value or a typed [`error::AuthError`], and
//! mapping those to HTTP status codes is the embedding server's job.
//!
//! The core is assembled by dependency injection: an [`AuthService`] is
//! constructed from a [`store::CredentialStore`] implementation, a
//! [`auth::password::PasswordHasher`] and a [`auth::token::TokenCodec`].
//! Production code plugs in [`store::PgCredentialStore`]; the test suite uses
//! [`store::MemoryCredentialStore`].

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use auth::service::AuthService;
pub use auth::token::{TokenCodec, TokenPayload};
pub use auth::{AuthResponse, LoginRequest, RefreshResponse, RegisterRequest, ResetPasswordRequest};
pub use error::AuthError;
pub use models::user::{PublicUser, RefreshTokenRecord, User};
pub use store::CredentialStore;
