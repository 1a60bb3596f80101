//! Document database operations

use anyhow::Result;
use bankdata_common::db::models::{Document, UserInfo};
use sqlx::{Row, SqlitePool};

fn document_from_row(row: &sqlx::sqlite::SqliteRow) -> Document {
    Document {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        file_path: row.get("file_path"),
        uploader_id: row.get("uploader_id"),
        created_at: row.get("created_at"),
        uploader: UserInfo {
            username: row.get("username"),
        },
    }
}

/// List all documents with uploader username, newest first
pub async fn list_documents(pool: &SqlitePool) -> Result<Vec<Document>> {
    let rows = sqlx::query(
        r#"
        SELECT d.id, d.title, d.description, d.file_path, d.uploader_id, d.created_at,
               u.username
        FROM documents d
        JOIN users u ON u.id = d.uploader_id
        ORDER BY d.created_at DESC, d.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(document_from_row).collect())
}

/// Insert a document row and return it joined with its uploader
pub async fn insert_document(
    pool: &SqlitePool,
    title: &str,
    description: Option<&str>,
    file_path: &str,
    uploader_id: i64,
) -> Result<Document> {
    let id = sqlx::query(
        r#"
        INSERT INTO documents (title, description, file_path, uploader_id, created_at)
        VALUES (?, ?, ?, ?, datetime('now'))
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(file_path)
    .bind(uploader_id)
    .execute(pool)
    .await?
    .last_insert_rowid();

    let row = sqlx::query(
        r#"
        SELECT d.id, d.title, d.description, d.file_path, d.uploader_id, d.created_at,
               u.username
        FROM documents d
        JOIN users u ON u.id = d.uploader_id
        WHERE d.id = ?
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(document_from_row(&row))
}

/// Load the stored file path of a document, if the row exists
pub async fn get_file_path(pool: &SqlitePool, id: i64) -> Result<Option<String>> {
    let path: Option<String> = sqlx::query_scalar("SELECT file_path FROM documents WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(path)
}

/// Delete a document row; returns true when a row was removed
pub async fn delete_document(pool: &SqlitePool, id: i64) -> Result<bool> {
    let affected = sqlx::query("DELETE FROM documents WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(affected > 0)
}
