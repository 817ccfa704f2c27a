use std::sync::Arc;

use skillcheck_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState<S>>`.
///
/// This is cheaply cloneable: stores share their pool or tables between
/// clones and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState<S: Store> {
    /// Persistence backend every service is constructed with.
    pub store: S,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl<S: Store> AppState<S> {
    pub fn new(store: S, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
