//! HTTP server.
//!
//! An axum router over [`StrindexApi`]. See [`routes::create_routes`] for the
//! endpoints and [`error`] for how failures become status codes.

use tracing::info;

use crate::api::StrindexApi;
use crate::config::ServerConfig;
use crate::store::DataStore;

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Builds the application router around an API facade.
pub fn create_app<S>(api: StrindexApi<S>, config: ServerConfig) -> axum::Router
where
    S: DataStore + Send + Sync + 'static,
{
    routes::create_routes(AppState::new(api, config))
}

/// Binds the configured address and serves until the process is stopped.
pub async fn serve(app: axum::Router, config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");
    axum::serve(listener, app).await
}

/// Initializes the tracing subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("strindex={},tower_http={}", level, level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
