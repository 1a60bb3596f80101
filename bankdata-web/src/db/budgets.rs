//! Budget database operations

use anyhow::Result;
use bankdata_common::db::models::{Budget, UserInfo};
use sqlx::{Row, SqlitePool};

fn budget_from_row(row: &sqlx::sqlite::SqliteRow) -> Budget {
    Budget {
        id: row.get("id"),
        activity: row.get("activity"),
        planned: row.get("planned"),
        realized: row.get("realized"),
        date: row.get("date"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        user: UserInfo {
            username: row.get("username"),
        },
    }
}

async fn fetch_budget(pool: &SqlitePool, id: i64) -> Result<Option<Budget>> {
    let row = sqlx::query(
        r#"
        SELECT b.id, b.activity, b.planned, b.realized, b.date, b.user_id, b.created_at,
               u.username
        FROM budgets b
        JOIN users u ON u.id = b.user_id
        WHERE b.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| budget_from_row(&r)))
}

/// List all budgets with owner username, ordered by date descending
pub async fn list_budgets(pool: &SqlitePool) -> Result<Vec<Budget>> {
    let rows = sqlx::query(
        r#"
        SELECT b.id, b.activity, b.planned, b.realized, b.date, b.user_id, b.created_at,
               u.username
        FROM budgets b
        JOIN users u ON u.id = b.user_id
        ORDER BY b.date DESC, b.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(budget_from_row).collect())
}

/// Insert a budget row and return it joined with its owner
pub async fn insert_budget(
    pool: &SqlitePool,
    activity: &str,
    planned: f64,
    realized: f64,
    date: &str,
    user_id: i64,
) -> Result<Budget> {
    let id = sqlx::query(
        r#"
        INSERT INTO budgets (activity, planned, realized, date, user_id, created_at)
        VALUES (?, ?, ?, ?, ?, datetime('now'))
        "#,
    )
    .bind(activity)
    .bind(planned)
    .bind(realized)
    .bind(date)
    .bind(user_id)
    .execute(pool)
    .await?
    .last_insert_rowid();

    let budget = fetch_budget(pool, id).await?;
    budget.ok_or_else(|| anyhow::anyhow!("budget row vanished after insert"))
}

/// Update a budget row; returns None when the row does not exist
pub async fn update_budget(
    pool: &SqlitePool,
    id: i64,
    activity: &str,
    planned: f64,
    realized: f64,
    date: &str,
) -> Result<Option<Budget>> {
    let affected = sqlx::query(
        r#"
        UPDATE budgets
        SET activity = ?, planned = ?, realized = ?, date = ?
        WHERE id = ?
        "#,
    )
    .bind(activity)
    .bind(planned)
    .bind(realized)
    .bind(date)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if affected == 0 {
        return Ok(None);
    }
    fetch_budget(pool, id).await
}

/// Delete a budget row; returns true when a row was removed
pub async fn delete_budget(pool: &SqlitePool, id: i64) -> Result<bool> {
    let affected = sqlx::query("DELETE FROM budgets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(affected > 0)
}
