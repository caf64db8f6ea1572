pub(crate) mod auth;
pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod token;
pub(crate) mod types;

use config::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::error::ConfigError as Error;
use crate::core::{config::Args, state::AppState};

pub async fn run() -> Result<(), Error> {
    let config = Config::builder()
        .add_source(config::Environment::with_prefix("CHIRPY"))
        .build()
        .map_err(Error::Config)?;

    let config = config.try_deserialize::<Args>().map_err(Error::Config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await
        .map_err(Error::Sql)?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(Error::DatabaseMigration)?;

    let state = AppState::new(
        pool,
        &config.secret,
        config.polka_key.clone(),
        config.platform.clone(),
    )?;

    let app = routes::router::routes(state, &config.filepath_root, config.auth_rate_limit);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::info!(
        port = config.port,
        platform = %config.platform,
        "serving files from {}",
        config.filepath_root
    );

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
