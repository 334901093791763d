#![allow(dead_code)]

use std::sync::Arc;

use snaplink::application::services::LinkService;
use snaplink::domain::LinkStore;
use snaplink::state::AppState;

/// Builds an `AppState` over a fresh store, returning the store alongside so
/// tests can seed and inspect it directly.
pub fn create_test_state() -> (AppState, Arc<LinkStore>) {
    let store = Arc::new(LinkStore::new());
    let state = AppState::new(Arc::new(LinkService::new(store.clone())));

    (state, store)
}

/// Allocates an ID for `url` and returns it.
pub fn seed_link(store: &LinkStore, url: &str) -> String {
    store.get_or_create_id(url)
}
