use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::Response;
use axum::middleware::Next;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::Identity;

/// Requires a valid bearer access token and exposes its subject as an [`Identity`] extension.
pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let identity = state.sessions.authenticate(request.headers())?;

    request.extensions_mut().insert(Identity(identity));

    Ok(next.run(request).await)
}
