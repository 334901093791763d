use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
}

impl AppState {
    pub fn new(links: Arc<LinkService>) -> Self {
        Self { links }
    }
}
