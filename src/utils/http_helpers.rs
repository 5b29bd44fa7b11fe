use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;

/// A general purpose HTTP error type that can be converted into an `IntoResponse`.
pub struct HTTPError {
    status: StatusCode,
    message: String,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HTTPError {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for wrapping a storage/session failure as a 500.
    pub fn internal(message: impl Into<String>) -> Self {
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Converts our `HTTPError` into an HTTP response.
impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message }).to_string();
        Response::builder()
            .status(self.status)
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }
}
