//! Documents page handler

use axum::response::{Html, IntoResponse};

const DOCUMENTS_HTML: &str = include_str!("../../../static/documents.html");

/// GET /dashboard/documents
///
/// Document table with upload form and per-row delete.
pub async fn documents_page() -> impl IntoResponse {
    Html(DOCUMENTS_HTML)
}
