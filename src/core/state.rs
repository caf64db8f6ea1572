use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use sqlx::postgres::PgPool;

use crate::controllers::chirp::ChirpController;
use crate::controllers::session::SessionController;
use crate::controllers::user::UserController;
use crate::core::error::ConfigError;
use crate::token::ledger::RefreshTokenLedger;
use crate::token::postgres::PgRefreshTokenStore;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) platform: String,
    pub(crate) users: UserController,
    pub(crate) chirps: ChirpController,
    pub(crate) sessions: SessionController<PgRefreshTokenStore>,
    file_server_hits: Arc<AtomicU64>,
}

impl AppState {
    pub(crate) fn new(
        pool: PgPool,
        secret: &str,
        api_key: String,
        platform: String,
    ) -> Result<Self, ConfigError> {
        let ledger = RefreshTokenLedger::new(PgRefreshTokenStore::new(pool.clone()));

        Ok(AppState {
            platform,
            users: UserController::new(pool.clone())?,
            chirps: ChirpController::new(pool),
            sessions: SessionController::new(secret, api_key, ledger)?,
            file_server_hits: Arc::new(AtomicU64::new(0)),
        })
    }

    pub(crate) fn record_hit(&self) {
        self.file_server_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn hits(&self) -> u64 {
        self.file_server_hits.load(Ordering::Relaxed)
    }

    pub(crate) fn reset_hits(&self) {
        self.file_server_hits.store(0, Ordering::Relaxed);
    }

    pub(crate) fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}
