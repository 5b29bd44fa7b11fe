//! Guarded navigation over HTTP.

use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::metrics::MetricsRecorder;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers the view routes: every GET path not claimed by an explicit
/// endpoint resolves through the navigator.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(navigate))
        .route("/*path", get(navigate))
}

/// Resolves a navigation attempt.
///
/// A navigation that lands somewhere other than the requested path becomes
/// a `303 See Other`; one that proceeds returns the resolved view as JSON
/// for the host to render.
async fn navigate(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, HTTPError> {
    let path = uri.path();
    let navigation = state.navigator.navigate(path).map_err(HTTPError::internal)?;

    let outcome = if navigation.redirected_from.is_some() {
        "redirected"
    } else {
        "allowed"
    };
    state
        .metrics
        .record_navigation(navigation.name.unwrap_or("unknown"), outcome);

    if navigation.location != path {
        Ok(Redirect::to(&navigation.location).into_response())
    } else {
        Ok(Json(navigation).into_response())
    }
}
