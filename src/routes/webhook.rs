use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::Webhook;

const USER_UPGRADED: &str = "user.upgraded";

#[instrument(skip_all)]
pub(crate) async fn polka(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Webhook>, JsonRejection>,
) -> Result<StatusCode, Error> {
    state.sessions.authorize_api_key(&headers)?;

    let Json(webhook) = payload?;

    if webhook.event != USER_UPGRADED {
        tracing::debug!(event = %webhook.event, "ignoring webhook event");
        return Ok(StatusCode::NO_CONTENT);
    }

    state.users.upgrade_to_chirpy_red(webhook.data.user_id).await?;

    tracing::info!(user_id = %webhook.data.user_id, "upgraded user to Chirpy Red");

    Ok(StatusCode::NO_CONTENT)
}
