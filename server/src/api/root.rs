use axum::{Json, extract::State, response::IntoResponse};
use axum_macros::debug_handler;
use serde::Serialize;

use crate::{
    AppState,
    request_info::RequestInfo,
    system::{RUNTIME_VERSION, SystemInfo},
    uptime::{Startup, format_human, now_iso8601, round2},
};

pub const PATH: &str = "/";

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "System Information API",
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    framework: "axum",
};

pub const ENDPOINTS: [EndpointDescriptor; 2] = [
    EndpointDescriptor {
        path: PATH,
        method: "GET",
        description: "Complete service information",
    },
    EndpointDescriptor {
        path: super::health::PATH,
        method: "GET",
        description: "Service health status",
    },
];

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: Vec<EndpointDescriptor>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeInfo {
    pub runtime_version: &'static str,
    pub uptime_seconds: f64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointDescriptor {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

impl RuntimeInfo {
    pub fn capture(startup: &Startup) -> Self {
        let elapsed = startup.elapsed_seconds();
        Self {
            runtime_version: RUNTIME_VERSION,
            uptime_seconds: round2(elapsed),
            uptime_human: format_human(elapsed),
            current_time: now_iso8601(),
            timezone: "UTC",
        }
    }
}

pub fn build_root_response(
    service: ServiceInfo,
    system: SystemInfo,
    runtime: RuntimeInfo,
    request: RequestInfo,
    endpoints: &[EndpointDescriptor],
) -> ResponseBody {
    ResponseBody {
        service,
        system,
        runtime,
        request,
        endpoints: endpoints.to_vec(),
    }
}

#[debug_handler]
#[tracing::instrument(skip_all, ret(level = "debug"))]
pub async fn handler(State(state): State<AppState>, request: RequestInfo) -> ResponseBody {
    state.access_log.accessed("Root", &request.client_ip);
    build_root_response(
        SERVICE,
        SystemInfo::gather(),
        RuntimeInfo::capture(&state.startup),
        request,
        &ENDPOINTS,
    )
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
