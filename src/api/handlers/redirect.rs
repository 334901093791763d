//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::api::handlers::home::FormPage;
use crate::state::AppState;

/// Redirects a short ID to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Behavior
///
/// - ID maps to an absolute URL (starts with `http`): 307 redirect to it.
/// - ID maps to something else: render the form page with the stored value
///   as the message. The store accepts arbitrary strings, so this is
///   reachable.
/// - ID unknown: render the form page with a no-match message. Misses are a
///   page, not an HTTP error status.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.links.resolve(&id) {
        Some(url) if url.starts_with("http") => Redirect::temporary(&url).into_response(),
        Some(value) => FormPage::with_message(value).into_response(),
        None => FormPage::with_message(format!("No match found for \"{id}\"")).into_response(),
    }
}
