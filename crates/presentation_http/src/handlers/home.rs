//! Frontend page handler

use axum::response::Html;

/// Serve the single-page frontend
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
