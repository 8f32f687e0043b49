//! Session Route
//!
//! - GET /api/v1/session - Whether the caller's bearer token is signed in

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::auth::{bearer_token, AuthStatus};

/// GET /api/v1/session
///
/// Never fails: provider errors degrade to signed out.
pub async fn session(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<AuthStatus> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);

    match state.auth.session(token).await {
        Ok(status) => Json(status),
        Err(e) => {
            tracing::warn!(provider = state.auth.name(), error = %e, "Session check failed");
            Json(AuthStatus::ANONYMOUS)
        }
    }
}
