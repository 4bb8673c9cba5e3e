//! The browser pages and their assets are served from the static directory.

mod common;

use axum::http::StatusCode;
use common::{body_text, get};

#[tokio::test]
async fn root_serves_gallery_page() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
    assert!(body_text(response).await.contains("id=\"villain-cards\""));
}

#[tokio::test]
async fn add_and_delete_pages_are_served() {
    let pool = common::test_pool().await;

    let add = get(common::build_test_app(pool.clone()), "/add").await;
    assert_eq!(add.status(), StatusCode::OK);
    assert!(body_text(add).await.contains("id=\"add-villain-form\""));

    let delete = get(common::build_test_app(pool), "/delete").await;
    assert_eq!(delete.status(), StatusCode::OK);
    assert!(body_text(delete).await.contains("id=\"delete-villain-form\""));
}

#[tokio::test]
async fn script_asset_is_served() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/static/villains.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/api/villains/"));
}
