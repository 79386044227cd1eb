//! Route configuration.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::state::AppState;
use crate::store::DataStore;

/// Creates all routes.
///
/// - `GET /health` - Health check
/// - `GET /strings` - Structured filter
/// - `POST /strings` - Ingest a string
/// - `GET /strings/filter-by-natural-language` - Natural-language filter
/// - `GET /strings/{value}` - Exact lookup
/// - `DELETE /strings/{value}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DataStore + Send + Sync + 'static,
{
    let body_limit = state.config().max_body_size;

    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route(
            "/strings",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // Static segment, matched ahead of the {value} capture below
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::natural_language_handler::<S>),
        )
        .route(
            "/strings/{value}",
            get(handlers::read_handler::<S>).delete(handlers::delete_handler::<S>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
