//! Demo seed data
//!
//! Inserts a second user plus a handful of documents and budget rows so a
//! fresh install has something to show on the dashboard. Every insert is
//! guarded by an existence check, so seeding is idempotent.

use crate::{auth, Result};
use sqlx::SqlitePool;
use tracing::info;

const DEMO_USERNAME: &str = "user1";
const DEMO_PASSWORD: &str = "user123";

/// Seed demo users, documents, and budgets
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<()> {
    auth::ensure_admin_user(pool).await?;

    let admin_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(auth::ADMIN_USERNAME)
        .fetch_one(pool)
        .await?;

    let user1_id = ensure_demo_user(pool).await?;

    seed_document(
        pool,
        "Laporan Keuangan Q1",
        Some("Laporan triwulan pertama"),
        "/uploads/laporan_q1.pdf",
        admin_id,
    )
    .await?;
    seed_document(
        pool,
        "Proposal Proyek A",
        Some("Proposal pembangunan proyek A"),
        "/uploads/proposal_a.docx",
        user1_id,
    )
    .await?;
    seed_document(
        pool,
        "Dokumentasi Rapat",
        Some("Notulen rapat mingguan"),
        "/uploads/rapat_maret.pdf",
        admin_id,
    )
    .await?;

    seed_budget(pool, "Pelatihan SDM", 10_000_000.0, 8_000_000.0, "2025-01-20", admin_id).await?;
    seed_budget(pool, "Pengadaan Laptop", 5_000_000.0, 0.0, "2025-02-10", user1_id).await?;
    seed_budget(pool, "Rapat Koordinasi", 2_000_000.0, 2_000_000.0, "2025-03-01", admin_id).await?;

    info!("Demo data seeded");
    Ok(())
}

async fn ensure_demo_user(pool: &SqlitePool) -> Result<i64> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(DEMO_USERNAME)
        .fetch_optional(pool)
        .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let password_hash = auth::hash_password(DEMO_PASSWORD)?;
    let id = sqlx::query(
        "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, datetime('now'))",
    )
    .bind(DEMO_USERNAME)
    .bind(password_hash)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

async fn seed_document(
    pool: &SqlitePool,
    title: &str,
    description: Option<&str>,
    file_path: &str,
    uploader_id: i64,
) -> Result<()> {
    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM documents WHERE title = ?")
        .bind(title)
        .fetch_optional(pool)
        .await?;
    if exists.is_some() {
        return Ok(());
    }

    sqlx::query(
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
    .await?;

    Ok(())
}

async fn seed_budget(
    pool: &SqlitePool,
    activity: &str,
    planned: f64,
    realized: f64,
    date: &str,
    user_id: i64,
) -> Result<()> {
    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM budgets WHERE activity = ?")
        .bind(activity)
        .fetch_optional(pool)
        .await?;
    if exists.is_some() {
        return Ok(());
    }

    sqlx::query(
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
    .await?;

    Ok(())
}
