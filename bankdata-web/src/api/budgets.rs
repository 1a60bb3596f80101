//! Budget CRUD endpoints
//!
//! Amounts are accepted as JSON numbers or numeric strings (the dashboard
//! form posts strings); `realized` falls back to 0 when absent or
//! unparseable.

use axum::{
    extract::{Path, State},
    routing::get,
    routing::put,
    Json, Router,
};
use bankdata_common::db::models::Budget;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct BudgetPayload {
    pub activity: Option<String>,
    pub planned: Option<Value>,
    pub realized: Option<Value>,
    pub date: Option<String>,
}

/// Coerce a JSON number or numeric string to f64
fn coerce_amount(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Validate a create/update payload, returning (activity, planned, realized, date)
fn validate_payload(payload: &BudgetPayload) -> ApiResult<(String, f64, f64, String)> {
    let activity = payload
        .activity
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let planned = coerce_amount(payload.planned.as_ref());
    let date = payload
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (Some(activity), Some(planned), Some(date)) = (activity, planned, date) else {
        return Err(ApiError::BadRequest(
            "Activity, planned amount, and date are required".to_string(),
        ));
    };

    let realized = coerce_amount(payload.realized.as_ref()).unwrap_or(0.0);

    Ok((activity.to_string(), planned, realized, date.to_string()))
}

fn parse_id(id: &str) -> ApiResult<i64> {
    id.parse()
        .map_err(|_| ApiError::BadRequest("Invalid budget ID".to_string()))
}

/// GET /api/budgets
///
/// All budgets with owner username, ordered by date descending.
pub async fn list_budgets(State(state): State<AppState>) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = crate::db::budgets::list_budgets(&state.db).await?;
    Ok(Json(budgets))
}

/// POST /api/budgets
pub async fn create_budget(
    State(state): State<AppState>,
    Json(payload): Json<BudgetPayload>,
) -> ApiResult<Json<Budget>> {
    let (activity, planned, realized, date) = validate_payload(&payload)?;

    // Rows are attributed to the admin account (no per-request sessions)
    let user_id = crate::db::users::admin_user_id(&state.db).await?;

    let budget =
        crate::db::budgets::insert_budget(&state.db, &activity, planned, realized, &date, user_id)
            .await?;

    info!("Created budget {} ({})", budget.id, budget.activity);
    Ok(Json(budget))
}

/// PUT /api/budgets/:id
pub async fn update_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BudgetPayload>,
) -> ApiResult<Json<Budget>> {
    let id = parse_id(&id)?;
    let (activity, planned, realized, date) = validate_payload(&payload)?;

    let budget =
        crate::db::budgets::update_budget(&state.db, id, &activity, planned, realized, &date)
            .await?
            .ok_or_else(|| ApiError::NotFound("Budget not found".to_string()))?;

    info!("Updated budget {}", id);
    Ok(Json(budget))
}

/// DELETE /api/budgets/:id
pub async fn delete_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;

    let removed = crate::db::budgets::delete_budget(&state.db, id).await?;
    if !removed {
        return Err(ApiError::NotFound("Budget not found".to_string()));
    }

    info!("Deleted budget {}", id);
    Ok(Json(json!({ "message": "Budget deleted successfully" })))
}

/// Build budget routes
pub fn budget_routes() -> Router<AppState> {
    Router::new()
        .route("/api/budgets", get(list_budgets).post(create_budget))
        .route("/api/budgets/:id", put(update_budget).delete(delete_budget))
}
