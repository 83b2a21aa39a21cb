/// Receives one call per endpoint invocation.
///
/// Injected through [`crate::AppState`] so handlers can be exercised
/// without a logging backend.
pub trait AccessLog: Send + Sync {
    fn accessed(&self, endpoint: &str, client_ip: &str);
}

/// Default [`AccessLog`], one `info` event per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAccessLog;

impl AccessLog for TracingAccessLog {
    fn accessed(&self, endpoint: &str, client_ip: &str) {
        tracing::info!("{} endpoint accessed from {}", endpoint, client_ip);
    }
}
