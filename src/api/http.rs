//! HTTP server setup with Axum

use axum::extract::DefaultBodyLimit;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use super::upload::upload_document;

/// Upload page served at `/`.
const INDEX_HTML: &str = include_str!("../../public/index.html");

/// Maximum accepted upload size. Scanned reports run large.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Create the Axum router with all endpoints
pub fn create_router() -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Static upload page
        .route("/", get(index))
        // Health check
        .route("/health", get(health_check))
        // Document analysis
        .route("/upload", post(upload_document))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
}

/// Upload page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
