use http::Request;
use middleware::ClientIp;
use tracing::Span;

const UNKNOWN_CLIENT_IP: &str = "<unknown-client-ip>";
const UNKNOWN_REQUEST_ID: &str = "<unknown-request-id>";

/// `TraceLayer` span carrying the caller, request id, method and URI as fields.
pub fn span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or(UNKNOWN_REQUEST_ID);

    let client_ip = match request.extensions().get::<ClientIp>() {
        Some(ClientIp(Some(ip))) => ip.to_string(),
        _ => UNKNOWN_CLIENT_IP.to_string(),
    };

    // error level so the request context survives when the filter is raised to warn/error
    tracing::error_span!(
        "request",
        client_ip = %client_ip,
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

