//! Dashboard overview page handler

use axum::response::{Html, IntoResponse};

const DASHBOARD_HTML: &str = include_str!("../../../static/dashboard.html");

/// GET /dashboard
///
/// Summary cards fed by /api/dashboard/stats.
pub async fn overview_page() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}
