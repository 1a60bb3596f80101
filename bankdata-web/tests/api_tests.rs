//! Integration tests for the bankdata-web HTTP API
//!
//! Each test builds the full router over a fresh database in a temp
//! directory and drives it with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use bankdata_web::{build_router, AppState};

async fn test_app() -> (Router, sqlx::SqlitePool, TempDir) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();
    bankdata_common::config::ensure_directories(&root).unwrap();

    let db_path = bankdata_common::config::database_path(&root);
    let pool = bankdata_common::db::init_database(&db_path).await.unwrap();

    let uploads_dir = bankdata_common::config::uploads_dir(&root);
    let state = AppState::new(pool.clone(), uploads_dir);
    (build_router(state), pool, tmp)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _pool, _tmp) = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "bankdata-web");
}

#[tokio::test]
async fn test_login_success() {
    let (app, _pool, _tmp) = test_app().await;

    let request = json_request(
        "POST",
        "/api/auth/login",
        serde_json::json!({"username": "admin", "password": "admin123"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["user"]["username"], "admin");
    assert!(json["user"]["id"].is_i64());
    assert!(json["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_bad_password() {
    let (app, _pool, _tmp) = test_app().await;

    let request = json_request(
        "POST",
        "/api/auth/login",
        serde_json::json!({"username": "admin", "password": "wrong"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (app, _pool, _tmp) = test_app().await;

    let request = json_request(
        "POST",
        "/api/auth/login",
        serde_json::json!({"username": "admin"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_budget_crud_flow() {
    let (app, _pool, _tmp) = test_app().await;

    // Create, with string amounts as the dashboard form sends them
    let request = json_request(
        "POST",
        "/api/budgets",
        serde_json::json!({
            "activity": "Pelatihan SDM",
            "planned": "10000000",
            "realized": "8000000",
            "date": "2025-01-20"
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["activity"], "Pelatihan SDM");
    assert_eq!(created["planned"], 10_000_000.0);
    assert_eq!(created["user"]["username"], "admin");
    let id = created["id"].as_i64().unwrap();

    // List
    let response = app.clone().oneshot(get_request("/api/budgets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Update
    let request = json_request(
        "PUT",
        &format!("/api/budgets/{}", id),
        serde_json::json!({
            "activity": "Pelatihan SDM",
            "planned": 10_000_000.0,
            "realized": 10_000_000.0,
            "date": "2025-01-20"
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["realized"], 10_000_000.0);

    // Delete
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/budgets/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Delete again: gone
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/budgets/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_budget_validation_and_bad_id() {
    let (app, _pool, _tmp) = test_app().await;

    // Missing planned amount
    let request = json_request(
        "POST",
        "/api/budgets",
        serde_json::json!({"activity": "x", "date": "2025-01-01"}),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Non-numeric id
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/budgets/abc")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

fn multipart_upload_request(title: &str, filename: &str, contents: &[u8]) -> Request<Body> {
    let boundary = "bankdata-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{title}\r\n",
            b = boundary,
            title = title
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\nUji upload\r\n",
            b = boundary
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            b = boundary,
            f = filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{b}--\r\n", b = boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/documents")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_document_upload_and_delete() {
    let (app, _pool, tmp) = test_app().await;
    let uploads_dir = bankdata_common::config::uploads_dir(tmp.path());

    // Upload
    let request = multipart_upload_request("Laporan Keuangan Q1", "laporan q1.pdf", b"%PDF-1.4 test");
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["title"], "Laporan Keuangan Q1");
    assert_eq!(created["uploader"]["username"], "admin");
    let file_path = created["filePath"].as_str().unwrap().to_string();
    assert!(file_path.starts_with("/uploads/"));
    let id = created["id"].as_i64().unwrap();

    // File landed on disk
    let filename = file_path.strip_prefix("/uploads/").unwrap();
    let on_disk = uploads_dir.join(filename);
    assert_eq!(std::fs::read(&on_disk).unwrap(), b"%PDF-1.4 test");

    // List shows it
    let response = app.clone().oneshot(get_request("/api/documents")).await.unwrap();
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Delete removes file and row
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/documents/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!on_disk.exists());

    let response = app.oneshot(get_request("/api/documents")).await.unwrap();
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_document_upload_requires_title_and_file() {
    let (app, _pool, _tmp) = test_app().await;

    let boundary = "bankdata-test-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\nonly description\r\n--{b}--\r\n",
        b = boundary
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/documents")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_document_delete_missing() {
    let (app, _pool, _tmp) = test_app().await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/documents/9999")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_init_db_and_aggregates() {
    let (app, _pool, _tmp) = test_app().await;

    // Manual init seeds the demo data
    let request = Request::builder()
        .method("POST")
        .uri("/api/ini-db")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Database initialized successfully");
    let tables: Vec<&str> = json["tables"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    for expected in ["budgets", "documents", "users"] {
        assert!(tables.contains(&expected), "missing table {}", expected);
    }

    // Dashboard stats reflect the seed
    let response = app.clone().oneshot(get_request("/api/dashboard/stats")).await.unwrap();
    let stats = body_json(response).await;
    assert_eq!(stats["totalDocuments"], 3);
    assert_eq!(stats["totalBudget"], 17_000_000.0);
    assert_eq!(stats["totalRealized"], 10_000_000.0);
    assert_eq!(stats["totalUsers"], 2);

    // Monitoring aggregates
    let response = app
        .clone()
        .oneshot(get_request("/api/monitoring/monthly-uploads"))
        .await
        .unwrap();
    let months = body_json(response).await;
    assert_eq!(months.as_array().unwrap().len(), 1);
    assert_eq!(months[0]["count"], 3);

    let response = app
        .clone()
        .oneshot(get_request("/api/monitoring/file-types"))
        .await
        .unwrap();
    let types = body_json(response).await;
    assert_eq!(types[0]["type"], "PDF");
    assert_eq!(types[0]["count"], 2);

    let response = app
        .oneshot(get_request("/api/monitoring/top-uploaders"))
        .await
        .unwrap();
    let uploaders = body_json(response).await;
    assert_eq!(uploaders[0]["username"], "admin");
    assert_eq!(uploaders[0]["count"], 2);
}

#[tokio::test]
async fn test_ui_pages_served() {
    let (app, _pool, _tmp) = test_app().await;

    for uri in [
        "/",
        "/dashboard",
        "/dashboard/documents",
        "/dashboard/budget",
        "/dashboard/monitoring",
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "page {} not served", uri);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"), "{}: {}", uri, content_type);
    }

    let response = app.oneshot(get_request("/static/bankdata.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_uploaded_files_served() {
    let (app, _pool, tmp) = test_app().await;

    let request = multipart_upload_request("Notulen", "rapat.txt", b"isi notulen");
    let response = app.clone().oneshot(request).await.unwrap();
    let created = body_json(response).await;
    let file_path = created["filePath"].as_str().unwrap().to_string();

    let response = app.oneshot(get_request(&file_path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"isi notulen");

    drop(tmp);
}
