//! Session endpoint handlers.
//!
//! The host commits an already-authenticated user record here; verifying
//! credentials against a backend is outside this layer.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::metrics::MetricsRecorder;
use crate::models::User;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers session routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/session",
        get(current_session).post(login).delete(logout),
    )
}

#[derive(Serialize)]
struct SessionResponse {
    authenticated: bool,
    username: String,
    user: Option<User>,
}

/// Returns the current session: the user record, the derived authenticated
/// flag, and the username ("" when logged out).
async fn current_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: state.session.is_authenticated(),
        username: state.session.username(),
        user: state.session.current_user(),
    })
}

/// Makes the posted user record the current session.
async fn login(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<StatusCode, HTTPError> {
    state.session.login(user).map_err(HTTPError::internal)?;
    state.metrics.record_session_operation("login");
    Ok(StatusCode::CREATED)
}

/// Ends the current session.
async fn logout(State(state): State<AppState>) -> Result<StatusCode, HTTPError> {
    state.session.logout().map_err(HTTPError::internal)?;
    state.metrics.record_session_operation("logout");
    Ok(StatusCode::NO_CONTENT)
}
