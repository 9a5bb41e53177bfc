use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::mosques::handlers;
use crate::features::mosques::services::MosqueService;

/// Create routes for the mosques feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<MosqueService>) -> Router {
    Router::new()
        .route("/api/mosques", get(handlers::list_mosques))
        .route("/api/mosques/{id}", get(handlers::get_mosque))
        .route(
            "/api/mosques/{id}/donations",
            get(handlers::list_mosque_donations),
        )
        .with_state(service)
}
