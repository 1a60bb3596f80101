//! Aggregate queries for the dashboard and monitoring endpoints
//!
//! These are the fixed raw SQL aggregates behind /api/dashboard/stats and
//! the three /api/monitoring endpoints. No parameters, no pagination.

use anyhow::Result;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Summary numbers for the dashboard landing page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_documents: i64,
    pub total_budget: f64,
    pub total_realized: f64,
    pub total_users: i64,
    /// Documents created in the last 30 days
    pub recent_uploads: i64,
}

/// Upload count for one calendar month
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyUpload {
    /// "YYYY-MM"
    pub month: String,
    pub count: i64,
}

/// Document count for one file-type bucket
#[derive(Debug, Clone, Serialize)]
pub struct FileTypeCount {
    #[serde(rename = "type")]
    pub file_type: String,
    pub count: i64,
}

/// Upload count for one user
#[derive(Debug, Clone, Serialize)]
pub struct TopUploader {
    pub username: String,
    pub count: i64,
}

/// Collect the four dashboard aggregates
pub async fn dashboard_stats(pool: &SqlitePool) -> Result<DashboardStats> {
    let total_documents: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(pool)
        .await?;

    let (total_budget, total_realized): (f64, f64) = sqlx::query_as(
        "SELECT COALESCE(SUM(planned), 0.0), COALESCE(SUM(realized), 0.0) FROM budgets",
    )
    .fetch_one(pool)
    .await?;

    let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let recent_uploads: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM documents WHERE created_at >= datetime('now', '-30 days')",
    )
    .fetch_one(pool)
    .await?;

    Ok(DashboardStats {
        total_documents,
        total_budget,
        total_realized,
        total_users,
        recent_uploads,
    })
}

/// Upload counts per month for the last 12 months, ascending
pub async fn monthly_uploads(pool: &SqlitePool) -> Result<Vec<MonthlyUpload>> {
    let rows = sqlx::query(
        r#"
        SELECT strftime('%Y-%m', created_at) AS month,
               COUNT(*) AS count
        FROM documents
        WHERE created_at >= datetime('now', '-12 months')
        GROUP BY strftime('%Y-%m', created_at)
        ORDER BY month ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| MonthlyUpload {
            month: row.get("month"),
            count: row.get("count"),
        })
        .collect())
}

/// Document counts bucketed by file extension, descending
pub async fn file_types(pool: &SqlitePool) -> Result<Vec<FileTypeCount>> {
    let rows = sqlx::query(
        r#"
        SELECT
          CASE
            WHEN file_path LIKE '%.pdf' THEN 'PDF'
            WHEN file_path LIKE '%.doc' THEN 'DOC'
            WHEN file_path LIKE '%.docx' THEN 'DOCX'
            WHEN file_path LIKE '%.xls' THEN 'XLS'
            WHEN file_path LIKE '%.xlsx' THEN 'XLSX'
            WHEN file_path LIKE '%.jpg' THEN 'JPG'
            WHEN file_path LIKE '%.jpeg' THEN 'JPEG'
            WHEN file_path LIKE '%.png' THEN 'PNG'
            ELSE 'OTHER'
          END AS type,
          COUNT(*) AS count
        FROM documents
        GROUP BY type
        ORDER BY count DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| FileTypeCount {
            file_type: row.get("type"),
            count: row.get("count"),
        })
        .collect())
}

/// Ten most active uploaders, descending; users with no uploads excluded
pub async fn top_uploaders(pool: &SqlitePool) -> Result<Vec<TopUploader>> {
    let rows = sqlx::query(
        r#"
        SELECT u.username,
               COUNT(d.id) AS count
        FROM users u
        LEFT JOIN documents d ON u.id = d.uploader_id
        GROUP BY u.id, u.username
        HAVING COUNT(d.id) > 0
        ORDER BY count DESC
        LIMIT 10
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| TopUploader {
            username: row.get("username"),
            count: row.get("count"),
        })
        .collect())
}
