use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body shared by every error response.
///
/// `path` is only present on not-found responses.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorBody {
    pub const NOT_FOUND: &'static str = "Not Found";
    pub const INTERNAL_SERVER_ERROR: &'static str = "Internal Server Error";

    pub fn not_found(path: impl Into<String>) -> Self {
        Self {
            error: Self::NOT_FOUND,
            path: Some(path.into()),
        }
    }

    pub fn internal_server_error() -> Self {
        Self {
            error: Self::INTERNAL_SERVER_ERROR,
            path: None,
        }
    }
}

/// Response extension marking a 5xx whose body has already been reduced
/// to [`ErrorBody::internal_server_error`].
#[derive(Debug, Clone, Copy)]
pub struct Sanitized;

/// `404 {"error": "Not Found", "path": <path>}`
pub fn not_found(path: impl Into<String>) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::not_found(path))).into_response()
}

/// `500 {"error": "Internal Server Error"}`
///
/// `detail` goes to the log only. It must never reach the body.
pub fn internal_error(detail: impl std::fmt::Debug) -> Response {
    tracing::error!("internal server error :: {:?}", detail);
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::internal_server_error()),
    )
        .into_response();
    response.extensions_mut().insert(Sanitized);
    response
}
