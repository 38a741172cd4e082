pub mod user;

pub use user::{PublicUser, RefreshTokenRecord, User};
