use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::Next,
};

/// 5xx responses are normally produced through `error::internal_error`,
/// but anything else that slips out of the router with a server error status
/// (framework rejections, hand-built responses) has its body logged
/// and replaced with the fixed internal error body.
pub async fn mw_handle_leaked_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() && response.extensions().get::<error::Sanitized>().is_none() {
        let detail = match to_bytes(response.into_body(), usize::MAX).await {
            Ok(content) => format!("{status} :: {content:?}"),
            Err(e) => {
                format!("{status} :: unable to convert response body to bytes :: {e:?}")
            }
        };
        tracing::warn!("{} leaked out of the router", status);

        let mut scrubbed = error::internal_error(detail);
        *scrubbed.status_mut() = status;
        return scrubbed;
    }

    response
}
