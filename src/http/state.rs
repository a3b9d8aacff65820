//! Application state for the HTTP server.

use std::sync::Arc;

use super::auth::SessionStore;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for data access
    pub repository: Arc<dyn FullRepository>,
    /// Active login sessions
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}
