use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Uuid;

use crate::core::error::Error;
use crate::token::store::{RefreshToken, RefreshTokenStore};

/// Random bytes per refresh token, hex encoded on the wire.
pub(crate) const TOKEN_BYTES: usize = 32;

pub(crate) const VALIDITY_DAYS: i64 = 60;

/// Issues opaque refresh tokens and resolves them back to their owner.
///
/// Tokens are multi-use: resolving does not consume or rotate them. They stop
/// working once `expires_at` passes or after [`RefreshTokenLedger::revoke`].
#[derive(Clone, Debug)]
pub(crate) struct RefreshTokenLedger<T: RefreshTokenStore> {
    store: T,
    validity: Duration,
}

impl<T: RefreshTokenStore> RefreshTokenLedger<T> {
    pub(crate) fn new(store: T) -> Self {
        Self::with_validity(store, Duration::days(VALIDITY_DAYS))
    }

    pub(crate) fn with_validity(store: T, validity: Duration) -> Self {
        Self { store, validity }
    }

    pub(crate) async fn issue(&self, identity: Uuid) -> Result<String, Error> {
        let now = Utc::now();

        let record = RefreshToken {
            token: generate_token(),
            user_id: identity,
            created_at: now,
            expires_at: now + self.validity,
            revoked_at: None,
        };

        self.store.insert(&record).await?;

        tracing::debug!(user_id = %identity, "issued refresh token");

        Ok(record.token)
    }

    pub(crate) async fn resolve(&self, token: &str) -> Result<Uuid, Error> {
        let record = self
            .store
            .find(token)
            .await?
            .ok_or(Error::RefreshTokenNotFound)?;

        check_usable(&record, Utc::now())
    }

    /// Revoking an already revoked token succeeds and keeps the original `revoked_at`.
    pub(crate) async fn revoke(&self, token: &str) -> Result<(), Error> {
        match self.store.revoke(token, Utc::now()).await? {
            true => Ok(()),
            false => Err(Error::RefreshTokenNotFound),
        }
    }
}

/// A token is still usable at the exact instant of `expires_at`.
fn check_usable(record: &RefreshToken, now: DateTime<Utc>) -> Result<Uuid, Error> {
    if record.revoked_at.is_some() {
        return Err(Error::RefreshTokenRevoked);
    }

    if now > record.expires_at {
        return Err(Error::RefreshTokenExpired);
    }

    Ok(record.user_id)
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);

    hex::encode(bytes)
}
