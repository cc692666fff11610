mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{admin_token, build_test_app, expect_json, get, post_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_submission_is_stored_unread(pool: sqlx::PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_json(
        &app,
        "/api/v1/contact",
        None,
        json!({
            "name": "  Grace Hopper  ",
            "email": "grace@example.com",
            "subject": "Compilers",
            "message": "Loved the portfolio."
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::CREATED).await;

    // Whitespace is trimmed before storage.
    assert_eq!(body["name"], "Grace Hopper");
    assert_eq!(body["is_read"], false);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_submission_is_rejected_and_not_stored(pool: sqlx::PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_json(
        &app,
        "/api/v1/contact",
        None,
        json!({ "name": "", "email": "not-an-email", "message": "" }),
    )
    .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn inbox_lists_unread_first_and_read_toggle_persists(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    for (name, message) in [("First", "msg one"), ("Second", "msg two")] {
        let response = post_json(
            &app,
            "/api/v1/contact",
            None,
            json!({ "name": name, "email": "x@example.com", "message": message }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let inbox = expect_json(get(&app, "/api/v1/messages", Some(&token)).await, StatusCode::OK).await;
    let first_id = inbox[0]["id"].as_i64().unwrap();

    let updated = expect_json(
        common::put_json(
            &app,
            &format!("/api/v1/messages/{first_id}/read"),
            Some(&token),
            json!({ "is_read": true }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["is_read"], true);

    // Read messages sink below unread ones.
    let inbox = expect_json(get(&app, "/api/v1/messages", Some(&token)).await, StatusCode::OK).await;
    assert_eq!(inbox[0]["is_read"], false);
    assert_eq!(inbox[1]["id"], first_id);

    let counts = expect_json(
        get(&app, "/api/v1/messages/unread-count", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(counts["unread"], 1);
}
