//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Components Checked
///
/// 1. **Store**: In-memory link count
/// 2. **Persistence**: Whether changes are awaiting the next snapshot flush
///
/// The store cannot fail while the process is up and a pending flush is a
/// normal transient state, so this endpoint always reports healthy; its
/// value is the component detail.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "42 links" },
///     "persistence": { "status": "ok", "message": "clean" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_check = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} links", state.links.link_count())),
    };

    let persistence_check = CheckStatus {
        status: "ok".to_string(),
        message: Some(
            if state.links.has_pending_changes() {
                "pending flush"
            } else {
                "clean"
            }
            .to_string(),
        ),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            persistence: persistence_check,
        },
    })
}
