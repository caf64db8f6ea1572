use axum::http::HeaderMap;
use chrono::Duration;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::auth::jwt::AccessTokenCodec;
use crate::auth::{header, password};
use crate::core::error::{self, Error};
use crate::token::ledger::RefreshTokenLedger;
use crate::token::store::RefreshTokenStore;
use crate::types::User;

pub(crate) const ACCESS_TOKEN_TTL_HOURS: i64 = 1;

/// Hashed once at startup so unknown emails cost the same bcrypt round as wrong passwords.
const TIMING_DUMMY_PASSWORD: &str = "chirpy-timing-dummy";

pub(crate) struct Session {
    pub(crate) user: User,
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user.id)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub(crate) struct SessionController<T: RefreshTokenStore> {
    codec: AccessTokenCodec,
    ledger: RefreshTokenLedger<T>,
    api_key: String,
    dummy_hash: String,
}

impl<T: RefreshTokenStore> std::fmt::Debug for SessionController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl<T: RefreshTokenStore> SessionController<T> {
    pub(crate) fn new(
        secret: &str,
        api_key: String,
        ledger: RefreshTokenLedger<T>,
    ) -> Result<Self, error::ConfigError> {
        Ok(Self {
            codec: AccessTokenCodec::new(secret),
            ledger,
            api_key,
            dummy_hash: bcrypt::non_truncating_hash(TIMING_DUMMY_PASSWORD, password::COST)?,
        })
    }

    /// Logs `user` in with `password`. `user` is `None` when the email matched nobody; that case
    /// fails exactly like a wrong password.
    pub(crate) async fn login(&self, user: Option<User>, password: &str) -> Result<Session, Error> {
        let user = match user {
            Some(user) => match password::verify_password(password, &user.hashed_password) {
                Ok(()) => user,
                Err(e) => {
                    tracing::warn!(user_id = %user.id, "login rejected: {}", e);
                    return Err(Error::InvalidCredentials);
                }
            },
            None => {
                let _ = password::verify_password(password, &self.dummy_hash);
                tracing::warn!("login rejected: unknown email");
                return Err(Error::InvalidCredentials);
            }
        };

        let refresh_token = self.ledger.issue(user.id).await?;
        let access_token = self.issue_access_token(user.id)?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(Session {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Resolves the identity behind a bearer access token.
    pub(crate) fn authenticate(&self, headers: &HeaderMap) -> Result<Uuid, Error> {
        let token = header::bearer_token(headers)?;

        self.codec.validate(token)
    }

    /// Exchanges a bearer refresh token for a new access token.
    pub(crate) async fn refresh(&self, headers: &HeaderMap) -> Result<String, Error> {
        let token = header::bearer_token(headers)?;
        let identity = self.ledger.resolve(token).await?;

        self.issue_access_token(identity)
    }

    /// Revokes a bearer refresh token. Access tokens already handed out stay valid until they expire.
    pub(crate) async fn revoke(&self, headers: &HeaderMap) -> Result<(), Error> {
        let token = header::bearer_token(headers)?;

        self.ledger.revoke(token).await
    }

    /// Checks an `ApiKey` credential against the configured key.
    pub(crate) fn authorize_api_key(&self, headers: &HeaderMap) -> Result<(), Error> {
        let key = header::api_key(headers)?;

        match bool::from(key.as_bytes().ct_eq(self.api_key.as_bytes())) {
            true => Ok(()),
            false => Err(Error::InvalidApiKey),
        }
    }

    fn issue_access_token(&self, identity: Uuid) -> Result<String, Error> {
        self.codec
            .issue(identity, Duration::hours(ACCESS_TOKEN_TTL_HOURS))
    }
}
