//! Manual database initialization endpoint
//!
//! Normally the schema is created at startup; this endpoint re-runs the
//! idempotent initialization and inserts the demo seed rows, then reports
//! the tables present. Useful when pointing the service at a fresh root
//! folder without restarting.

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use tracing::info;

use crate::{ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct InitDbResponse {
    pub message: String,
    pub tables: Vec<String>,
}

/// POST /api/ini-db
pub async fn init_db(State(state): State<AppState>) -> ApiResult<Json<InitDbResponse>> {
    info!("Manual database initialization requested");

    bankdata_common::db::init::create_tables(&state.db).await?;
    bankdata_common::auth::ensure_admin_user(&state.db).await?;
    bankdata_common::db::seed::seed_demo_data(&state.db).await?;

    let tables = bankdata_common::db::init::list_tables(&state.db).await?;

    Ok(Json(InitDbResponse {
        message: "Database initialized successfully".to_string(),
        tables,
    }))
}

/// Build init-db routes
pub fn init_db_routes() -> Router<AppState> {
    Router::new().route("/api/ini-db", post(init_db))
}
