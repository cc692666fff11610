mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use common::{admin_token, body_json, build_test_app_with, test_config};

const BOUNDARY: &str = "folio-upload-test-boundary";

/// Minimal valid 1x1 PNG.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x62, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

async fn upload_file(
    app: &Router,
    token: Option<&str>,
    filename: &str,
    bytes: &[u8],
) -> Response {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/uploads")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = builder.body(Body::from(body)).expect("build request");
    app.clone().oneshot(request).await.expect("send request")
}

#[sqlx::test(migrations = "../db/migrations")]
async fn uploaded_file_is_stored_served_and_deletable(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let config = test_config();
    let media_root = config.media_root.clone();
    let app = build_test_app_with(pool, config);

    let response = upload_file(&app, Some(&token), "avatar.png", TINY_PNG).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;

    let filename = body["filename"].as_str().expect("filename").to_string();
    assert_eq!(body["url"], format!("/media/{filename}"));
    assert_eq!(body["width"], 1);
    assert_eq!(body["height"], 1);
    assert!(media_root.join(&filename).exists(), "file lands on disk");

    // Served back through the static media route.
    let served = common::get(&app, &format!("/media/{filename}"), None).await;
    assert_eq!(served.status(), StatusCode::OK);

    // Deleting removes the file and a re-fetch 404s.
    let deleted = common::delete(&app, &format!("/api/v1/uploads/{filename}"), Some(&token)).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(!media_root.join(&filename).exists());

    let gone = common::get(&app, &format!("/media/{filename}"), None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn disallowed_extensions_are_rejected(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let config = test_config();
    let media_root = config.media_root.clone();
    let app = build_test_app_with(pool, config);

    let response = upload_file(&app, Some(&token), "script.exe", b"MZ not an image").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = std::fs::read_dir(&media_root).expect("read media dir").count();
    assert_eq!(stored, 0, "rejected upload must not be stored");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn uploads_require_authentication(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);

    let response = upload_file(&app, None, "avatar.png", TINY_PNG).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
