//! Application state for the HTTP server.

use crate::db::StudentRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for document store operations
    pub repository: Arc<dyn StudentRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }
}
