use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::Error;

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub(crate) struct RefreshToken {
    pub(crate) token: String,
    pub(crate) user_id: Uuid,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) expires_at: DateTime<Utc>,
    pub(crate) revoked_at: Option<DateTime<Utc>>,
}

/// Persistence seam for refresh tokens. Each call touches a single row keyed by the token string.
pub(crate) trait RefreshTokenStore {
    /// Fails if the token string already exists.
    async fn insert(&self, token: &RefreshToken) -> Result<(), Error>;

    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, Error>;

    /// Marks the token revoked at `at` unless it already is. Returns `false` if the token is unknown.
    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> Result<bool, Error>;
}
