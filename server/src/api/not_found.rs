use axum::{
    http::{Method, Uri},
    response::Response,
};

/// Router fallback, any method.
#[tracing::instrument(skip_all)]
pub async fn handler(method: Method, uri: Uri) -> Response {
    tracing::warn!("resource not found :: {} {}", method, uri.path());
    error::not_found(uri.path())
}
