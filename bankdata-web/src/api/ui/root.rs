//! Root page handler - login form

use axum::response::{Html, IntoResponse};

const LOGIN_HTML: &str = include_str!("../../../static/login.html");

/// GET /
///
/// Login page. On success the client stores the user record in local
/// storage and navigates to /dashboard.
pub async fn root_page() -> impl IntoResponse {
    Html(LOGIN_HTML)
}
