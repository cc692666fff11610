mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{build_test_app, expect_json, get, post_json};
use folio_api::auth::password;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;

async fn seed_admin(pool: &sqlx::PgPool) {
    let hash = password::hash_password("hunter2hunter2").expect("hash");
    UserRepo::create(
        pool,
        &CreateUser {
            email: "owner@example.com".to_string(),
            password_hash: hash,
            display_name: "Owner".to_string(),
            role: "admin".to_string(),
        },
    )
    .await
    .expect("seed admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_tokens_and_user(pool: sqlx::PgPool) {
    seed_admin(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "owner@example.com", "password": "hunter2hunter2" }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["user"]["email"], "owner@example.com");
    // The password hash must never appear in a response.
    assert!(body["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_is_401(pool: sqlx::PgPool) {
    seed_admin(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "owner@example.com", "password": "wrong" }),
    )
    .await;
    let body = expect_json(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_email_gets_the_same_error_as_bad_password(pool: sqlx::PgPool) {
    seed_admin(&pool).await;
    let app = build_test_app(pool.clone());

    let unknown = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "nobody@example.com", "password": "whatever" }),
    )
    .await;
    let unknown_body = expect_json(unknown, StatusCode::UNAUTHORIZED).await;

    let bad_pw = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "owner@example.com", "password": "wrong" }),
    )
    .await;
    let bad_pw_body = expect_json(bad_pw, StatusCode::UNAUTHORIZED).await;

    assert_eq!(unknown_body["error"], bad_pw_body["error"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_the_session(pool: sqlx::PgPool) {
    seed_admin(&pool).await;
    let app = build_test_app(pool);

    let login = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "owner@example.com", "password": "hunter2hunter2" }),
    )
    .await;
    let login_body = expect_json(login, StatusCode::OK).await;
    let refresh_token = login_body["refresh_token"].as_str().unwrap().to_string();

    let refresh = post_json(
        &app,
        "/api/v1/auth/refresh",
        None,
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    let refresh_body = expect_json(refresh, StatusCode::OK).await;
    assert!(refresh_body["access_token"].is_string());

    // The old refresh token was revoked by the rotation.
    let replay = post_json(
        &app,
        "/api/v1/auth/refresh",
        None,
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_routes_reject_missing_and_bad_tokens(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let no_token = get(&app, "/api/v1/projects", None).await;
    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);

    let bad_token = get(&app, "/api/v1/projects", Some("not-a-jwt")).await;
    assert_eq!(bad_token.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn five_failed_logins_lock_the_account(pool: sqlx::PgPool) {
    seed_admin(&pool).await;
    let app = build_test_app(pool);

    for _ in 0..5 {
        let response = post_json(
            &app,
            "/api/v1/auth/login",
            None,
            json!({ "email": "owner@example.com", "password": "wrong" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // The fifth failure tripped the lock, so even the right password is
    // rejected now.
    let locked = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "owner@example.com", "password": "hunter2hunter2" }),
    )
    .await;
    let body = expect_json(locked, StatusCode::FORBIDDEN).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn a_successful_login_resets_the_failure_counter(pool: sqlx::PgPool) {
    seed_admin(&pool).await;
    let app = build_test_app(pool);

    let fail_once = || {
        post_json(
            &app,
            "/api/v1/auth/login",
            None,
            json!({ "email": "owner@example.com", "password": "wrong" }),
        )
    };
    let succeed_once = || {
        post_json(
            &app,
            "/api/v1/auth/login",
            None,
            json!({ "email": "owner@example.com", "password": "hunter2hunter2" }),
        )
    };

    // Four failures stay under the threshold.
    for _ in 0..4 {
        assert_eq!(fail_once().await.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(succeed_once().await.status(), StatusCode::OK);

    // The success cleared the counter, so four more failures still do
    // not lock the account.
    for _ in 0..4 {
        assert_eq!(fail_once().await.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(succeed_once().await.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_bootstrap_is_idempotent_and_login_capable(pool: sqlx::PgPool) {
    folio_api::bootstrap::ensure_admin(&pool, "root@example.com", "first-password-123")
        .await
        .expect("first bootstrap");
    // A second run with different credentials must not touch the
    // existing account.
    folio_api::bootstrap::ensure_admin(&pool, "root@example.com", "other-password-456")
        .await
        .expect("second bootstrap");

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("count users");
    assert_eq!(users, 1);

    let app = build_test_app(pool);
    let ok = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "root@example.com", "password": "first-password-123" }),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);

    let stale = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "root@example.com", "password": "other-password-456" }),
    )
    .await;
    assert_eq!(stale.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dead_sessions_are_purged_by_the_retention_task(pool: sqlx::PgPool) {
    use std::time::Duration;

    seed_admin(&pool).await;
    let app = build_test_app(pool.clone());

    // One login plus one refresh leaves two rows: the rotated-away
    // session (revoked) and the live one.
    let login = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({ "email": "owner@example.com", "password": "hunter2hunter2" }),
    )
    .await;
    let login_body = expect_json(login, StatusCode::OK).await;
    let refresh_token = login_body["refresh_token"].as_str().unwrap();
    let refresh = post_json(
        &app,
        "/api/v1/auth/refresh",
        None,
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(refresh.status(), StatusCode::OK);

    // And one expired session straight into the table.
    let user_id: i64 = sqlx::query_scalar("SELECT id FROM users LIMIT 1")
        .fetch_one(&pool)
        .await
        .expect("seeded user id");
    sqlx::query(
        "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at)
         VALUES ($1, 'expired-hash', NOW() - INTERVAL '1 day')",
    )
    .bind(user_id)
    .execute(&pool)
    .await
    .expect("insert expired session");

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_sessions")
        .fetch_one(&pool)
        .await
        .expect("count sessions");
    assert_eq!(total, 3);

    // The retention task purges immediately on startup.
    let cancel = tokio_util::sync::CancellationToken::new();
    let task = tokio::spawn(folio_api::background::retention::run(
        pool.clone(),
        Duration::from_secs(3600),
        cancel.clone(),
    ));
    tokio::time::sleep(Duration::from_millis(100)).await;
    cancel.cancel();
    task.await.expect("retention task join");

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_sessions")
        .fetch_one(&pool)
        .await
        .expect("count sessions");
    assert_eq!(remaining, 1, "only the live session should survive");
    let live: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM user_sessions WHERE is_revoked = false AND expires_at > NOW()",
    )
    .fetch_one(&pool)
    .await
    .expect("count live sessions");
    assert_eq!(live, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_the_authenticated_user(pool: sqlx::PgPool) {
    let token = common::admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/auth/me", Some(&token)).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["email"], "admin@example.com");
    assert_eq!(body["role"], "admin");
}
