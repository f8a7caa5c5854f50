//! API module
//!
//! HTTP API endpoints, middleware and static asset serving.

pub mod middleware;
pub mod routes;
pub mod spa;

use std::path::Path;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::service::ExpenseService;

pub use routes::create_router;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: ExpenseService,
}

impl AppState {
    pub fn new(service: ExpenseService) -> Self {
        Self { service }
    }
}

/// Build the full application router.
///
/// When `static_dir` points at an existing directory, unmatched paths are
/// served from it.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        // Liveness only
        .route("/health", get(health_check))
        .merge(create_router());

    if let Some(spa) = static_dir.and_then(spa::spa_service) {
        router = router.fallback_service(spa);
    }

    // Note: Axum layers are applied in reverse order (last added = first executed)
    // Order: trace -> request id -> context -> logging -> handler
    router
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::context_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
