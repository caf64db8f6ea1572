use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::error::Error;
use crate::token::store::{RefreshToken, RefreshTokenStore};

#[derive(Clone, Debug)]
pub(crate) struct PgRefreshTokenStore {
    pool: PgPool,
}

impl PgRefreshTokenStore {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RefreshTokenStore for PgRefreshTokenStore {
    async fn insert(&self, token: &RefreshToken) -> Result<(), Error> {
        sqlx::query(
            "INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $3, $4, $5);",
        )
        .bind(&token.token)
        .bind(token.user_id)
        .bind(token.created_at)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, Error> {
        let record = sqlx::query_as::<_, RefreshToken>(
            "SELECT
                token,
                user_id,
                created_at,
                expires_at,
                revoked_at
            FROM refresh_tokens
            WHERE token = $1;",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> Result<bool, Error> {
        let result = sqlx::query(
            "UPDATE refresh_tokens
            SET revoked_at = COALESCE(revoked_at, $2), updated_at = $2
            WHERE token = $1;",
        )
        .bind(token)
        .bind(at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
