//! Application state for the HTTP server.

use std::sync::Arc;

use crate::clients::ClientDirectory;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for store operations
    pub repository: Arc<dyn FullRepository>,
    /// Read-only client roster
    pub directory: Arc<ClientDirectory>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(repository: Arc<dyn FullRepository>, directory: Arc<ClientDirectory>) -> Self {
        Self {
            repository,
            directory,
        }
    }
}
