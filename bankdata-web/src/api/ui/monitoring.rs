//! Monitoring page handler

use axum::response::{Html, IntoResponse};

const MONITORING_HTML: &str = include_str!("../../../static/monitoring.html");

/// GET /dashboard/monitoring
///
/// Upload charts fed by the three /api/monitoring endpoints.
pub async fn monitoring_page() -> impl IntoResponse {
    Html(MONITORING_HTML)
}
