//! Sinkhole catalog routes

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::sinkholes::handlers;
use crate::features::sinkholes::services::SinkholeService;

/// Create routes for the sinkhole catalog
pub fn routes(service: Arc<SinkholeService>) -> Router {
    Router::new()
        .route("/api/sinkholes", post(handlers::create_sinkhole))
        .route("/api/sinkholes", get(handlers::list_sinkholes))
        .route(
            "/api/sinkholes/{id}",
            get(handlers::get_sinkhole)
                .put(handlers::replace_sinkhole)
                .patch(handlers::update_sinkhole)
                .delete(handlers::delete_sinkhole),
        )
        .with_state(service)
}
