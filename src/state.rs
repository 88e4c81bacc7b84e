//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkStore;
use crate::utils::id_generator::IdGenerator;

/// State shared by all handlers.
///
/// Cloning is cheap; the service is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Builds the state around a store and an identifier generator.
    pub fn new(store: Arc<dyn LinkStore>, generator: IdGenerator) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store, generator)),
        }
    }
}
