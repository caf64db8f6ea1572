use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The authenticated principal of a request, inserted by the auth middleware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Identity(pub(crate) Uuid);

#[derive(Clone, sqlx::FromRow)]
pub(crate) struct User {
    pub(crate) id: Uuid,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) email: String,
    pub(crate) hashed_password: String,
    pub(crate) is_chirpy_red: bool,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("email", &self.email)
            .field("is_chirpy_red", &self.is_chirpy_red)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub(crate) struct Chirp {
    pub(crate) id: Uuid,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) body: String,
    pub(crate) user_id: Uuid,
}
