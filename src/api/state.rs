//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::auth::{AuthProvider, DisabledAuth};
use crate::config::ApiConfig;
use crate::content::ContentStore;
use crate::submissions::Submissions;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only site content and the career scorer
    pub content: ContentStore,
    /// Form validation and acknowledgement
    pub submissions: Submissions,
    /// Session checks against the hosted identity provider
    pub auth: Arc<dyn AuthProvider>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState without an auth provider
    pub fn new(content: ContentStore, submissions: Submissions, config: ApiConfig) -> Self {
        Self {
            content,
            submissions,
            auth: Arc::new(DisabledAuth),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Builder method: use a session provider
    pub fn with_auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = auth;
        self
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
