//! Monitoring endpoints
//!
//! Three fixed aggregates feeding the charts page: uploads per month,
//! file-type distribution, and top uploaders.

use axum::{extract::State, routing::get, Json, Router};

use crate::db::stats::{FileTypeCount, MonthlyUpload, TopUploader};
use crate::{ApiResult, AppState};

/// GET /api/monitoring/monthly-uploads
pub async fn get_monthly_uploads(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MonthlyUpload>>> {
    let months = crate::db::stats::monthly_uploads(&state.db).await?;
    Ok(Json(months))
}

/// GET /api/monitoring/file-types
pub async fn get_file_types(State(state): State<AppState>) -> ApiResult<Json<Vec<FileTypeCount>>> {
    let types = crate::db::stats::file_types(&state.db).await?;
    Ok(Json(types))
}

/// GET /api/monitoring/top-uploaders
pub async fn get_top_uploaders(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TopUploader>>> {
    let uploaders = crate::db::stats::top_uploaders(&state.db).await?;
    Ok(Json(uploaders))
}

/// Build monitoring routes
pub fn monitoring_routes() -> Router<AppState> {
    Router::new()
        .route("/api/monitoring/monthly-uploads", get(get_monthly_uploads))
        .route("/api/monitoring/file-types", get(get_file_types))
        .route("/api/monitoring/top-uploaders", get(get_top_uploaders))
}
