//! Row models shared across the Bank Data crates
//!
//! JSON field names are camelCase to match the dashboard client.

use serde::Serialize;

/// User record as exposed to the client (password hash never leaves the server)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

/// Uploader/owner summary embedded in document and budget rows
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub username: String,
}

/// Document record joined with its uploader
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file_path: String,
    pub uploader_id: i64,
    pub created_at: String,
    pub uploader: UserInfo,
}

/// Budget line item (planned vs. realized spend) joined with its owner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub activity: String,
    pub planned: f64,
    pub realized: f64,
    pub date: String,
    pub user_id: i64,
    pub created_at: String,
    pub user: UserInfo,
}
