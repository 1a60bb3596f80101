//! Budget page handler

use axum::response::{Html, IntoResponse};

const BUDGET_HTML: &str = include_str!("../../../static/budget.html");

/// GET /dashboard/budget
///
/// Budget CRUD table with realization percentage and status badges.
pub async fn budget_page() -> impl IntoResponse {
    Html(BUDGET_HTML)
}
