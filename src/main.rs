//! Medication Screening Server - Binary Entry Point
//!
//! This is the main entry point for the medscreen-server binary.

use medscreen::api::create_router;
use medscreen::catalog::catalog;
use medscreen::types::ScreenResult;

/// Listen port when MEDSCREEN_PORT is unset.
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> ScreenResult<()> {
    // Build the catalog before accepting traffic
    let catalog = catalog();
    eprintln!(
        "[Server] Catalog ready: {} listed categories, {} NSAID terms",
        catalog.listed_categories().len(),
        catalog.nsaid_terms().len()
    );

    let port = std::env::var("MEDSCREEN_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let app = create_router();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    eprintln!("[Server] Listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
