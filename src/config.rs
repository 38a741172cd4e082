use std::env;

/// Runtime settings for the auth core, read from the environment once at
/// startup. The secrets are required; everything else has a default matching
/// the deployed TaskNest configuration.
pub struct Config {
    pub database_url: String,
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    /// Access token lifetime in minutes.
    pub access_token_ttl_minutes: i64,
    /// Refresh token lifetime in days. Also used for the persisted
    /// `expires_at` on refresh-token records.
    pub refresh_token_ttl_days: i64,
    /// bcrypt cost factor.
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            access_token_secret: env::var("JWT_ACCESS_SECRET")
                .expect("JWT_ACCESS_SECRET must be set"),
            refresh_token_secret: env::var("JWT_REFRESH_SECRET")
                .expect("JWT_REFRESH_SECRET must be set"),
            access_token_ttl_minutes: env::var("ACCESS_TOKEN_TTL_MINUTES")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("ACCESS_TOKEN_TTL_MINUTES must be a number"),
            refresh_token_ttl_days: env::var("REFRESH_TOKEN_TTL_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .expect("REFRESH_TOKEN_TTL_DAYS must be a number"),
            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("BCRYPT_COST must be a number"),
        }
    }
}
