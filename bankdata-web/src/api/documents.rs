//! Document endpoints: list, multipart upload, delete
//!
//! Uploads write the payload to the uploads directory and store the public
//! path in the row. Deletes remove the file first (best-effort) and then
//! the row, so a missing file never blocks the delete.

use axum::{
    extract::{Multipart, Path, State},
    routing::{delete, get},
    Json, Router,
};
use bankdata_common::db::models::Document;
use serde_json::{json, Value};
use tracing::info;

use crate::{ApiError, ApiResult, AppState};

/// GET /api/documents
///
/// All documents with uploader username, newest first.
pub async fn list_documents(State(state): State<AppState>) -> ApiResult<Json<Vec<Document>>> {
    let documents = crate::db::documents::list_documents(&state.db).await?;
    Ok(Json(documents))
}

/// POST /api/documents
///
/// Multipart form: `title` (required), `description` (optional),
/// `file` (required). Returns the created row.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<Document>> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        match field.name() {
            Some("title") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid title field: {}", e)))?;
                if !value.trim().is_empty() {
                    title = Some(value.trim().to_string());
                }
            }
            Some("description") => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Invalid description field: {}", e))
                })?;
                if !value.trim().is_empty() {
                    description = Some(value.trim().to_string());
                }
            }
            Some("file") => {
                file_name = field.file_name().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid file field: {}", e)))?;
                file_bytes = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let (Some(title), Some(file_bytes)) = (title, file_bytes) else {
        return Err(ApiError::BadRequest(
            "Title and file are required".to_string(),
        ));
    };

    // Uploads are attributed to the admin account (no per-request sessions)
    let uploader_id = crate::db::users::admin_user_id(&state.db).await?;

    let file_name = file_name.unwrap_or_else(|| "upload".to_string());
    let public_path =
        crate::storage::save_upload(&state.uploads_dir, &file_name, &file_bytes).await?;

    let document = crate::db::documents::insert_document(
        &state.db,
        &title,
        description.as_deref(),
        &public_path,
        uploader_id,
    )
    .await?;

    info!("Uploaded document {} ({})", document.id, document.file_path);
    Ok(Json(document))
}

/// DELETE /api/documents/:id
///
/// Removes the stored file (ignoring errors) and then the row.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid document ID".to_string()))?;

    let file_path = crate::db::documents::get_file_path(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Document not found".to_string()))?;

    // File first; a failure here is logged and does not block the row delete
    crate::storage::delete_upload(&state.uploads_dir, &file_path).await;

    crate::db::documents::delete_document(&state.db, id).await?;

    info!("Deleted document {}", id);
    Ok(Json(json!({ "message": "Document deleted successfully" })))
}

/// Build document routes
pub fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/api/documents", get(list_documents).post(upload_document))
        .route("/api/documents/:id", delete(delete_document))
}
