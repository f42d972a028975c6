//! Catalog endpoint.

use axum::{
    extract::State,
    http::{header, Method},
    response::IntoResponse,
    routing::any,
    Router,
};

use crate::error::Result;
use crate::state::AppState;

/// Path the catalog is served on.
pub const CATALOG_PATH: &str = "/go-data-types";

/// Catalog routes. Every method gets the same response.
pub fn routes() -> Router<AppState> {
    Router::new().route(CATALOG_PATH, any(handle_data_types))
}

/// Serve the full catalog as JSON.
async fn handle_data_types(
    State(state): State<AppState>,
    method: Method,
) -> Result<impl IntoResponse> {
    tracing::debug!(%method, entries = state.catalog.len(), "serving data type catalog");

    let mut body = serde_json::to_vec(state.catalog)?;
    // Newline-terminated, like a streaming JSON encoder.
    body.push(b'\n');

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
