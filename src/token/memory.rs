use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::error::Error;
use crate::token::store::{RefreshToken, RefreshTokenStore};

#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryRefreshTokenStore {
    tokens: Arc<Mutex<HashMap<String, RefreshToken>>>,
}

impl RefreshTokenStore for MemoryRefreshTokenStore {
    async fn insert(&self, token: &RefreshToken) -> Result<(), Error> {
        let mut tokens = self.tokens.lock().await;

        if tokens.contains_key(&token.token) {
            return Err(Error::Sql(sqlx::Error::Protocol(
                "duplicate refresh token".into(),
            )));
        }

        tokens.insert(token.token.clone(), token.clone());

        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, Error> {
        Ok(self.tokens.lock().await.get(token).cloned())
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> Result<bool, Error> {
        match self.tokens.lock().await.get_mut(token) {
            Some(record) => {
                record.revoked_at.get_or_insert(at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
