//! UI Routes - HTML pages for the Bank Data dashboard
//!
//! Vanilla HTML/CSS/ES6, no frameworks; assets are embedded at compile
//! time and served from memory.
//!
//! # Structure
//! - **Static Assets** (`static_assets`): CSS/JS file serving
//! - **Root Page** (`root`): login form
//! - **Overview** (`overview`): dashboard summary cards
//! - **Documents** (`documents`): upload form and document table
//! - **Budget** (`budget`): budget CRUD table
//! - **Monitoring** (`monitoring`): upload charts

use crate::AppState;
use axum::{routing::get, Router};

mod budget;
mod documents;
mod monitoring;
mod overview;
mod root;
mod static_assets;

use budget::budget_page;
use documents::documents_page;
use monitoring::monitoring_page;
use overview::overview_page;
use root::root_page;
use static_assets::{
    serve_bankdata_css, serve_budget_js, serve_dashboard_js, serve_documents_js, serve_login_js,
    serve_monitoring_js,
};

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(root_page))
        .route("/dashboard", get(overview_page))
        .route("/dashboard/documents", get(documents_page))
        .route("/dashboard/budget", get(budget_page))
        .route("/dashboard/monitoring", get(monitoring_page))
        // Static assets
        .route("/static/bankdata.css", get(serve_bankdata_css))
        .route("/static/login.js", get(serve_login_js))
        .route("/static/dashboard.js", get(serve_dashboard_js))
        .route("/static/documents.js", get(serve_documents_js))
        .route("/static/budget.js", get(serve_budget_js))
        .route("/static/monitoring.js", get(serve_monitoring_js))
}
