use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::Identity;
use crate::types::request::Credentials;
use crate::types::response;

#[instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<response::User>), Error> {
    let Json(credentials) = payload?;

    let user = state
        .users
        .create_user(&credentials.email, &credentials.password)
        .await?;

    tracing::info!(user_id = %user.id, "registered user");

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip_all, fields(user_id = %identity.0))]
pub(crate) async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<response::User>, Error> {
    let Json(credentials) = payload?;

    let user = state
        .users
        .update_email_and_password(identity.0, &credentials.email, &credentials.password)
        .await?;

    Ok(Json(user.into()))
}
