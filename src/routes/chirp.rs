use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::Identity;
use crate::types::request::{ChirpQuery, NewChirp};
use crate::types::response;

#[instrument(skip_all, fields(user_id = %identity.0))]
pub(crate) async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<NewChirp>, JsonRejection>,
) -> Result<(StatusCode, Json<response::Chirp>), Error> {
    let Json(params) = payload?;

    // the account may have been deleted since the access token was issued
    let author = state
        .users
        .get_user_by_id(identity.0)
        .await?
        .ok_or(Error::UserNotFound)?;

    let chirp = state.chirps.create(author.id, &params.body).await?;

    Ok((StatusCode::CREATED, Json(chirp.into())))
}

#[instrument(skip(state))]
pub(crate) async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ChirpQuery>,
) -> Result<Json<Vec<response::Chirp>>, Error> {
    let author = match query.author_id.as_deref() {
        Some(id) if !id.is_empty() => Some(Uuid::parse_str(id)?),
        _ => None,
    };

    let chirps = state.chirps.list(author, query.sort).await?;

    Ok(Json(chirps.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<response::Chirp>, Error> {
    let id = Uuid::parse_str(&id)?;

    let chirp = state.chirps.get(id).await?;

    Ok(Json(chirp.into()))
}

#[instrument(skip(state, identity), fields(user_id = %identity.0))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = Uuid::parse_str(&id)?;

    state.chirps.delete(id, identity.0).await?;

    Ok(StatusCode::NO_CONTENT)
}
