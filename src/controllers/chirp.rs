use crate::core::error::Error;
use crate::types::Chirp;
use crate::types::request::SortOrder;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub(crate) const MAX_CHIRP_LENGTH: usize = 140;

#[derive(Clone, Debug)]
pub(crate) struct ChirpController {
    pool: PgPool,
}

impl ChirpController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create(&self, user_id: Uuid, body: &str) -> Result<Chirp, Error> {
        validate_body(body)?;

        let now = Utc::now();

        let chirp = sqlx::query_as::<_, Chirp>(
            "INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES ($1, $2, $2, $3, $4)
            RETURNING id, created_at, updated_at, body, user_id;",
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(chirp)
    }

    pub(crate) async fn get(&self, id: Uuid) -> Result<Chirp, Error> {
        sqlx::query_as::<_, Chirp>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps WHERE id = $1;",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::ChirpNotFound)
    }

    pub(crate) async fn list(
        &self,
        author: Option<Uuid>,
        sort: SortOrder,
    ) -> Result<Vec<Chirp>, Error> {
        let query = match sort {
            SortOrder::Asc => {
                "SELECT id, created_at, updated_at, body, user_id
                FROM chirps
                WHERE $1::uuid IS NULL OR user_id = $1
                ORDER BY created_at ASC;"
            }
            SortOrder::Desc => {
                "SELECT id, created_at, updated_at, body, user_id
                FROM chirps
                WHERE $1::uuid IS NULL OR user_id = $1
                ORDER BY created_at DESC;"
            }
        };

        let chirps = sqlx::query_as::<_, Chirp>(query)
            .bind(author)
            .fetch_all(&self.pool)
            .await?;

        Ok(chirps)
    }

    /// Deletes a chirp on behalf of `user_id`, who must be its author.
    pub(crate) async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), Error> {
        let chirp = self.get(id).await?;

        if chirp.user_id != user_id {
            return Err(Error::Forbidden);
        }

        sqlx::query("DELETE FROM chirps WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn validate_body(body: &str) -> Result<(), Error> {
    match body.chars().count() {
        n if n > MAX_CHIRP_LENGTH => Err(Error::ChirpTooLong),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_length_counts_characters() {
        assert!(validate_body(&"a".repeat(MAX_CHIRP_LENGTH)).is_ok());
        assert!(validate_body(&"é".repeat(MAX_CHIRP_LENGTH)).is_ok());
        assert!(matches!(
            validate_body(&"a".repeat(MAX_CHIRP_LENGTH + 1)),
            Err(Error::ChirpTooLong)
        ));
    }

    #[test]
    fn test_empty_body() {
        assert!(validate_body("").is_ok());
    }
}
