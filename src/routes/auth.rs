use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::Credentials;
use crate::types::response;

#[instrument(skip_all)]
pub(crate) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<response::Login>, Error> {
    let Json(credentials) = payload?;

    let user = state.users.get_user_by_email(&credentials.email).await?;

    let session = state.sessions.login(user, &credentials.password).await?;

    Ok(Json(response::Login {
        user: session.user.into(),
        token: session.access_token,
        refresh_token: session.refresh_token,
    }))
}

#[instrument(skip_all)]
pub(crate) async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<response::Token>, Error> {
    let token = state.sessions.refresh(&headers).await?;

    Ok(Json(response::Token { token }))
}

#[instrument(skip_all)]
pub(crate) async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, Error> {
    state.sessions.revoke(&headers).await?;

    Ok(StatusCode::NO_CONTENT)
}
