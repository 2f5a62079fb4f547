use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::files::handlers;
use crate::features::files::services::FileService;

/// Create routes for the files feature
pub fn routes(service: Arc<FileService>) -> Router {
    Router::new()
        .route(
            "/files",
            get(handlers::list_files).post(handlers::create_file),
        )
        .route("/files/{id}", delete(handlers::delete_file))
        .with_state(service)
}
