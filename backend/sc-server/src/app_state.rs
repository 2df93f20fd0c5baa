use sc_db::DatabaseGateway;

use std::sync::Arc;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Owns the one connection to the project request store
    pub gateway: Arc<DatabaseGateway>,
}

impl AppState {
    pub fn new(gateway: DatabaseGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
