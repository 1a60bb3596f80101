//! bankdata-web library interface
//!
//! Exposes the router and application state for integration testing.

pub mod api;
pub mod db;
pub mod error;
pub mod storage;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Directory where uploaded documents are stored
    pub uploads_dir: PathBuf,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: SqlitePool, uploads_dir: PathBuf) -> Self {
        Self {
            db,
            uploads_dir,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let uploads_service = ServeDir::new(&state.uploads_dir);

    Router::new()
        // UI routes (HTML pages + static assets)
        .merge(api::ui::ui_routes())
        // API routes
        .merge(api::auth::auth_routes())
        .merge(api::documents::document_routes())
        .merge(api::budgets::budget_routes())
        .merge(api::dashboard::dashboard_routes())
        .merge(api::monitoring::monitoring_routes())
        .merge(api::init_db::init_db_routes())
        .merge(api::health::health_routes())
        // Uploaded files served straight from disk
        .nest_service("/uploads", uploads_service)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
