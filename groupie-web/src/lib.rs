//! groupie-web library - Groupie Tracker web front end
//!
//! Loads artists, locations, dates and relations from the upstream API once
//! at startup and serves them as server-rendered HTML pages.

use axum::Router;
use std::sync::Arc;
use std::time::Duration;

pub mod api;
pub mod client;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod render;
pub mod server;
pub mod store;

pub use crate::error::{PageError, PageResult};
pub use crate::store::DataStore;

use crate::render::Renderer;

/// Default bound on handling one request
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state shared across HTTP handlers
///
/// The store is immutable once built, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot produced by the startup load
    pub store: Arc<DataStore>,
    /// Page renderer
    pub renderer: Arc<dyn Renderer>,
    /// Upper bound on handling a single request
    pub request_timeout: Duration,
}

impl AppState {
    /// Create new application state
    pub fn new(store: DataStore, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            store: Arc::new(store),
            renderer,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Build application router
///
/// Layers, outermost first: request tracing, request timeout, panic guard,
/// error-page rendering. All of them cover the fallback as well.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::get;
    use tower_http::catch_panic::CatchPanicLayer;
    use tower_http::timeout::TimeoutLayer;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/", get(api::index))
        .route("/artist", get(api::artist_by_query))
        .route("/artist/", get(api::artist_by_query))
        .route("/artist/:id", get(api::artist_by_path))
        .route("/artist/:id/", get(api::artist_by_path))
        .route("/concerts", get(api::concerts))
        .route("/404", get(api::not_found))
        .route("/500", get(api::internal_error))
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::error_pages,
        ))
        .layer(CatchPanicLayer::custom(api::panic_response))
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
