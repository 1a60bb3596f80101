//! Upload storage
//!
//! Uploaded documents live on local disk under the root folder's `uploads/`
//! directory. Rows in the `documents` table store the public path
//! (`/uploads/<filename>`); filenames are prefixed with the upload timestamp
//! to avoid collisions.

use chrono::Utc;
use std::io;
use std::path::Path;
use tracing::warn;

/// Public URL prefix under which stored files are served
pub const PUBLIC_PREFIX: &str = "/uploads/";

/// Reduce a client-supplied filename to a safe single path component
///
/// Strips directory components and control characters. An empty result
/// falls back to "upload" so the stored name is never just the timestamp.
pub fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Write an uploaded payload to the uploads directory
///
/// Returns the public path to store in the database.
pub async fn save_upload(
    uploads_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> io::Result<String> {
    // Create uploads directory if it doesn't exist
    tokio::fs::create_dir_all(uploads_dir).await?;

    let filename = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_filename(original_name)
    );
    let file_path = uploads_dir.join(&filename);
    tokio::fs::write(&file_path, bytes).await?;

    Ok(format!("{}{}", PUBLIC_PREFIX, filename))
}

/// Remove a stored file, given the public path from a document row
///
/// Best-effort: a missing or undeletable file logs a warning and returns,
/// so the database row can still be removed.
pub async fn delete_upload(uploads_dir: &Path, public_path: &str) {
    let filename = match public_path.strip_prefix(PUBLIC_PREFIX) {
        Some(name) if !name.is_empty() => name,
        _ => {
            warn!("Refusing to delete upload with unexpected path: {}", public_path);
            return;
        }
    };

    // The stored value is produced by save_upload, but guard against a
    // tampered row pointing outside the uploads directory.
    let filename = sanitize_filename(filename);

    let file_path = uploads_dir.join(&filename);
    if let Err(e) = tokio::fs::remove_file(&file_path).await {
        warn!("Error deleting file {}: {}", file_path.display(), e);
    }
}
