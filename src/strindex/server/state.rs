//! Shared application state for the HTTP server.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::StrindexApi;
use crate::config::ServerConfig;
use crate::store::DataStore;

/// State handed to every request handler.
///
/// The API facade sits behind a single lock. Reads share it; ingestion and
/// deletion hold it exclusively, so a duplicate check and the insert that
/// follows it can never interleave with another write.
pub struct AppState<S: DataStore> {
    api: Arc<RwLock<StrindexApi<S>>>,
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is behind an Arc and need not be Clone
impl<S: DataStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DataStore> AppState<S> {
    pub fn new(api: StrindexApi<S>, config: ServerConfig) -> Self {
        Self {
            api: Arc::new(RwLock::new(api)),
            config: Arc::new(config),
        }
    }

    pub fn api(&self) -> &RwLock<StrindexApi<S>> {
        &self.api
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
