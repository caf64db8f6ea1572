use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::types;

#[derive(Serialize)]
pub(crate) struct User {
    pub(crate) id: Uuid,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) email: String,
    pub(crate) is_chirpy_red: bool,
}

impl From<types::User> for User {
    fn from(user: types::User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Login {
    #[serde(flatten)]
    pub(crate) user: User,
    pub(crate) token: String,
    pub(crate) refresh_token: String,
}

#[derive(Serialize)]
pub(crate) struct Token {
    pub(crate) token: String,
}

#[derive(Serialize)]
pub(crate) struct Chirp {
    pub(crate) id: Uuid,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) body: String,
    pub(crate) user_id: Uuid,
}

impl From<types::Chirp> for Chirp {
    fn from(chirp: types::Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}
