use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{header::USER_AGENT, request::Parts},
};
use middleware::ClientIp;
use serde::Serialize;

/// Caller details echoed back by the root endpoint.
///
/// Extraction never fails. Anything missing becomes an empty string.
#[derive(Debug, Clone, Serialize)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl RequestInfo {
    pub fn from_parts(parts: &Parts) -> Self {
        let client_ip = parts
            .extensions
            .get::<ClientIp>()
            .map(ClientIp::to_string)
            .unwrap_or_default();

        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.path())
            .unwrap_or_else(|| parts.uri.path())
            .to_string();

        Self {
            client_ip,
            user_agent,
            method: parts.method.as_str().to_string(),
            path,
        }
    }
}

impl<S> FromRequestParts<S> for RequestInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
