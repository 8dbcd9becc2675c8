pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the site router.
///
/// Kept separate from `main` so integration tests can drive the full stack
/// without binding a listener.
pub fn create_app(config: config::Config) -> Router {
    let state = AppState { config };

    Router::new()
        .route("/", get(routes::index::page))
        .route("/booking", post(routes::booking::submit))
        .route("/health", get(routes::health::health))
        .route("/static/{*path}", get(routes::serve_asset))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
