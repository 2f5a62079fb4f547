use axum::{routing::post, Router};

use crate::features::search::handlers;

/// Create routes for the search feature
pub fn routes() -> Router {
    Router::new().route("/search", post(handlers::search))
}
