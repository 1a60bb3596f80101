//! Static asset handlers for the dashboard UI
//!
//! Embeds and serves CSS/JS files at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const BANKDATA_CSS: &str = include_str!("../../../static/bankdata.css");
const LOGIN_JS: &str = include_str!("../../../static/login.js");
const DASHBOARD_JS: &str = include_str!("../../../static/dashboard.js");
const DOCUMENTS_JS: &str = include_str!("../../../static/documents.js");
const BUDGET_JS: &str = include_str!("../../../static/budget.js");
const MONITORING_JS: &str = include_str!("../../../static/monitoring.js");

fn css_response(body: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        body,
    )
        .into_response()
}

fn js_response(body: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        body,
    )
        .into_response()
}

/// GET /static/bankdata.css
pub async fn serve_bankdata_css() -> Response {
    css_response(BANKDATA_CSS)
}

/// GET /static/login.js
pub async fn serve_login_js() -> Response {
    js_response(LOGIN_JS)
}

/// GET /static/dashboard.js
pub async fn serve_dashboard_js() -> Response {
    js_response(DASHBOARD_JS)
}

/// GET /static/documents.js
pub async fn serve_documents_js() -> Response {
    js_response(DOCUMENTS_JS)
}

/// GET /static/budget.js
pub async fn serve_budget_js() -> Response {
    js_response(BUDGET_JS)
}

/// GET /static/monitoring.js
pub async fn serve_monitoring_js() -> Response {
    js_response(MONITORING_JS)
}
