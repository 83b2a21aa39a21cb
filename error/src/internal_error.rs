#[derive(thiserror::Error, Debug)]
#[error("{0:?}")]
pub struct InternalError(#[from] pub anyhow::Error);

impl axum::response::IntoResponse for InternalError {
    fn into_response(self) -> axum::response::Response {
        crate::internal_error(&self.0)
    }
}
