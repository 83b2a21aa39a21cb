use std::any::Any;

use axum::response::Response;

/// Response factory for `tower_http::catch_panic::CatchPanicLayer::custom`.
///
/// The panic payload is logged; the client only sees the fixed 500 body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "<non-string panic payload>"
    };

    error::internal_error(format!("handler panicked :: {detail}"))
}
