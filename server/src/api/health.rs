use axum::{Json, extract::State, response::IntoResponse};
use axum_macros::debug_handler;
use serde::Serialize;

use crate::{
    AppState,
    request_info::RequestInfo,
    uptime::{now_iso8601, round2},
};

pub const PATH: &str = "/health";

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: f64,
}

pub fn build_health_response(uptime_seconds: f64) -> ResponseBody {
    ResponseBody {
        status: "healthy",
        timestamp: now_iso8601(),
        uptime_seconds: round2(uptime_seconds),
    }
}

#[debug_handler]
#[tracing::instrument(skip_all, ret(level = "debug"))]
pub async fn handler(State(state): State<AppState>, request: RequestInfo) -> ResponseBody {
    state.access_log.accessed("Health check", &request.client_ip);
    build_health_response(state.startup.elapsed_seconds())
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
