//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::repository::PostBackend;
use crate::service::PostService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Post service for all business logic.
    pub post_service: Arc<PostService<PostBackend>>,
}

impl AppState {
    /// Wraps a service for sharing across handlers.
    #[must_use]
    pub fn new(post_service: PostService<PostBackend>) -> Self {
        Self {
            post_service: Arc::new(post_service),
        }
    }
}
