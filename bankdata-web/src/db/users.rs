//! User database operations

use anyhow::{anyhow, Result};
use sqlx::{Row, SqlitePool};

/// Full user row, including the password hash (server-side only)
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Load a user by username for credential verification
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<UserRecord>> {
    let row = sqlx::query(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| UserRecord {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }))
}

/// Id of the bootstrap admin user
///
/// Uploads are attributed to the admin account; there is no per-request
/// session identity.
pub async fn admin_user_id(pool: &SqlitePool) -> Result<i64> {
    let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(bankdata_common::auth::ADMIN_USERNAME)
        .fetch_optional(pool)
        .await?;

    id.ok_or_else(|| anyhow!("admin user missing; database not initialized"))
}
