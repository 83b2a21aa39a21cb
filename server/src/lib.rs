mod access_log;
pub mod api;
mod request_info;
mod span;
mod system;
mod uptime;

pub use access_log::{AccessLog, TracingAccessLog};
pub use request_info::RequestInfo;
pub use system::{RUNTIME_VERSION, SystemInfo};
pub use uptime::{Startup, format_human};

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, middleware::from_fn, routing::get};
use error::{Context, InternalError};
use middleware::{handle_panic, latency_ms, mw_client_ip, mw_handle_leaked_5xx};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOpts {
    /// IP address or hostname.
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl ServerOpts {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 6000;
}

impl Default for ServerOpts {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.into(),
            port: Self::DEFAULT_PORT,
            debug: false,
        }
    }
}

/// `DEBUG` is on only for a case-insensitive `"true"`.
pub fn parse_debug_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[derive(Clone)]
pub struct AppState {
    pub startup: Startup,
    pub access_log: Arc<dyn AccessLog>,
}

impl AppState {
    pub fn new(startup: Startup) -> Self {
        Self {
            startup,
            access_log: Arc::new(TracingAccessLog),
        }
    }

    pub fn with_access_log(self, access_log: Arc<dyn AccessLog>) -> Self {
        Self { access_log, ..self }
    }
}

pub fn server(state: AppState) -> Router {
    let router = Router::new()
        .route(api::root::PATH, get(api::root::handler))
        .route(api::health::PATH, get(api::health::handler))
        .fallback(api::not_found::handler)
        .with_state(state);

    with_middleware(router)
}

/// Wraps `router` in the middleware stack every response goes through.
///
/// Panics and leaked 5xx bodies are converted to the fixed internal error body here.
/// The request id layers sit outside both converters so 5xx responses keep `x-request-id`.
pub fn with_middleware(router: Router) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(mw_handle_leaked_5xx))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(latency_ms));

    router.layer(middleware)
}

pub async fn serve(opts: ServerOpts, startup: Startup) -> Result<(), InternalError> {
    tracing::info!("{:?}", opts);

    let app = server(AppState::new(startup)).into_make_service_with_connect_info::<SocketAddr>();

    let listener = bind(&opts).await?;
    tracing::info!(
        "System Information API listening on {} (debug={})",
        listener.local_addr().context("local_addr")?,
        opts.debug
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("axum::serve")
}

async fn bind(opts: &ServerOpts) -> Result<TcpListener, InternalError> {
    TcpListener::bind((opts.host.as_str(), opts.port))
        .await
        .context(format!("bind :: {}:{}", opts.host, opts.port))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("unable to listen for Ctrl-C :: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("unable to install SIGTERM handler :: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received SIGINT (Ctrl-C), starting graceful shutdown"),
        _ = terminate => tracing::info!("received SIGTERM, starting graceful shutdown"),
    }
}
