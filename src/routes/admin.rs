use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::Response;
use axum::middleware::Next;
use axum::response::Html;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;

#[instrument(skip_all)]
pub(crate) async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>",
        state.hits()
    ))
}

/// Wipes all users and the hit counter. Only available on the dev platform.
#[instrument(skip_all)]
pub(crate) async fn reset(State(state): State<AppState>) -> Result<&'static str, Error> {
    if !state.is_dev() {
        return Err(Error::Forbidden);
    }

    let deleted = state.users.delete_all().await?;
    state.reset_hits();

    tracing::info!(deleted, "reset database");

    Ok("Reset")
}

/// Counts requests to the static file server.
pub(crate) async fn count_hits(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response<Body> {
    state.record_hit();

    next.run(request).await
}
