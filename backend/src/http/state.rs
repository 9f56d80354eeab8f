//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::models::CourtScale;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Summary provider
    pub repository: Arc<dyn FullRepository>,
    /// Scale used for shot charts when the request does not name one
    pub scale: CourtScale,
}

impl AppState {
    /// Create a new application state with the default court scale.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            scale: CourtScale::default(),
        }
    }

    pub fn with_scale(mut self, scale: CourtScale) -> Self {
        self.scale = scale;
        self
    }
}
