use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::{Body, to_bytes},
};
use http::{Request, Response};
use server::{AccessLog, AppState, Startup};
use tower::ServiceExt;

pub mod macros;

pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new() -> Self {
        Self::with_state(AppState::new(Startup::capture()))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            router: server::server(state),
        }
    }

    /// Arbitrary routes behind the production middleware stack.
    pub fn with_routes(routes: Router) -> Self {
        Self {
            router: server::with_middleware(routes),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Asserter {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap(/* Infallible */);
        Asserter::from(response)
    }
}

/// Records every access-log call instead of emitting it.
#[derive(Default)]
pub struct RecordingAccessLog {
    pub entries: Mutex<Vec<(String, String)>>,
}

impl AccessLog for RecordingAccessLog {
    fn accessed(&self, endpoint: &str, client_ip: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((endpoint.to_string(), client_ip.to_string()));
    }
}

impl RecordingAccessLog {
    pub fn state(self: &Arc<Self>) -> AppState {
        AppState::new(Startup::capture()).with_access_log(self.clone())
    }
}

pub struct Asserter {
    response: Response<Body>,
}

impl Asserter {
    pub fn into_response(self) -> Response<Body> {
        self.response
    }

    pub fn status(self, expected: u16) -> Self {
        assert_eq!(
            self.response.status().as_u16(),
            expected,
            "expected status {}, got {}",
            expected,
            self.response.status()
        );
        self
    }

    pub fn is_json(self) -> Self {
        let content_type = self
            .response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        assert_eq!(content_type, Some("application/json"));
        self
    }

    pub async fn json_body<T>(self, f: impl FnOnce(T))
    where
        T: serde::de::DeserializeOwned,
    {
        f(self.into_deserialized_json_body::<T>().await)
    }

    pub async fn into_deserialized_json_body<T>(self) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let body_bytes = to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body");

        serde_json::from_slice::<T>(&body_bytes).expect("unable to deserialize response body")
    }
}

impl From<Response<Body>> for Asserter {
    fn from(response: Response<Body>) -> Self {
        Self { response }
    }
}

#[cfg(feature = "tracing")]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

#[cfg(feature = "tracing")]
pub fn tracing_init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}
