//! Dashboard statistics endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::db::stats::DashboardStats;
use crate::{ApiResult, AppState};

/// GET /api/dashboard/stats
///
/// Document count, budget totals, user count, and uploads in the last
/// 30 days.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    let stats = crate::db::stats::dashboard_stats(&state.db).await?;
    Ok(Json(stats))
}

/// Build dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/api/dashboard/stats", get(get_stats))
}
