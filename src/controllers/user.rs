use crate::auth::password;
use crate::core::error::{self, Error};
use crate::types::User;
use chrono::Utc;
use regex::Regex;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub(crate) struct UserController {
    pool: PgPool,
    email_pattern: Regex,
}

impl std::fmt::Debug for UserController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserController")
            .field("email_pattern", &self.email_pattern.as_str())
            .finish()
    }
}

impl UserController {
    pub(crate) fn new(pool: PgPool) -> Result<Self, error::ConfigError> {
        Ok(Self {
            pool,
            email_pattern: Regex::new(r"^[^@\s]+@[^@\s]+$")?,
        })
    }

    pub(crate) async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created_at, updated_at, email, hashed_password, is_chirpy_red
            FROM users
            WHERE email = $1;",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub(crate) async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created_at, updated_at, email, hashed_password, is_chirpy_red
            FROM users
            WHERE id = $1;",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub(crate) async fn create_user(&self, email: &str, password: &str) -> Result<User, Error> {
        if !self.email_pattern.is_match(email) {
            return Err(Error::InvalidEmail);
        }

        let hashed_password = password::hash_password(password)?;
        let now = Utc::now();

        match sqlx::query_as::<_, User>(
            "INSERT INTO users (id, created_at, updated_at, email, hashed_password)
            VALUES ($1, $2, $2, $3, $4)
            RETURNING id, created_at, updated_at, email, hashed_password, is_chirpy_red;",
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(email)
        .bind(&hashed_password)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::UserAlreadyExists)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn update_email_and_password(
        &self,
        id: Uuid,
        email: &str,
        password: &str,
    ) -> Result<User, Error> {
        if !self.email_pattern.is_match(email) {
            return Err(Error::InvalidEmail);
        }

        let hashed_password = password::hash_password(password)?;

        match sqlx::query_as::<_, User>(
            "UPDATE users
            SET email = $2, hashed_password = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, created_at, updated_at, email, hashed_password, is_chirpy_red;",
        )
        .bind(id)
        .bind(email)
        .bind(&hashed_password)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(Error::UserNotFound),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::UserAlreadyExists)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<(), Error> {
        let result = sqlx::query(
            "UPDATE users SET is_chirpy_red = TRUE, updated_at = $2 WHERE id = $1;",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        match result.rows_affected() {
            0 => Err(Error::UserNotFound),
            _ => Ok(()),
        }
    }

    /// Removes every user; chirps and refresh tokens go with them.
    pub(crate) async fn delete_all(&self) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM users;")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
