mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{admin_token, build_test_app, delete, expect_json, get, post_json, put_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn service_crud_roundtrip(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let created = expect_json(
        post_json(
            &app,
            "/api/v1/services",
            Some(&token),
            json!({ "title": "Backend development", "description": "APIs and databases" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["is_active"], true);

    let updated = expect_json(
        put_json(
            &app,
            &format!("/api/v1/services/{id}"),
            Some(&token),
            json!({ "is_active": false }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["is_active"], false);

    let response = delete(&app, &format!("/api/v1/services/{id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn skill_proficiency_is_validated(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/skills",
        Some(&token),
        json!({ "name": "Rust", "proficiency_pct": 150 }),
    )
    .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let response = post_json(
        &app,
        "/api/v1/skills",
        Some(&token),
        json!({ "name": "Rust", "proficiency_pct": 90 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unapproved_testimonials_stay_off_the_public_site(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let created = expect_json(
        post_json(
            &app,
            "/api/v1/testimonials",
            Some(&token),
            json!({ "author_name": "Happy Client", "quote": "Great work!", "rating": 5 }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["is_approved"], false);
    let id = created["id"].as_i64().unwrap();

    let home = expect_json(get(&app, "/api/v1/public/home", None).await, StatusCode::OK).await;
    assert_eq!(home["data"]["testimonials"].as_array().unwrap().len(), 0);

    expect_json(
        put_json(
            &app,
            &format!("/api/v1/testimonials/{id}"),
            Some(&token),
            json!({ "is_approved": true }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let home = expect_json(get(&app, "/api/v1/public/home", None).await, StatusCode::OK).await;
    let testimonials = home["data"]["testimonials"].as_array().unwrap();
    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0]["author_name"], "Happy Client");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_category_slug_is_a_conflict(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/categories",
        Some(&token),
        json!({ "name": "Web", "slug": "web" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        &app,
        "/api/v1/categories",
        Some(&token),
        json!({ "name": "Web Apps", "slug": "web" }),
    )
    .await;
    let body = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn experience_dates_are_validated(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/experience",
        Some(&token),
        json!({
            "title": "Engineer",
            "organisation": "Acme",
            "start_date": "2024-05-01",
            "end_date": "2023-01-01"
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let response = post_json(
        &app,
        "/api/v1/experience",
        Some(&token),
        json!({
            "title": "Engineer",
            "organisation": "Acme",
            "start_date": "2022-01-01",
            "end_date": null
        }),
    )
    .await;
    let created = expect_json(response, StatusCode::CREATED).await;
    assert!(created["end_date"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn education_and_experience_are_separate_collections(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    post_json(
        &app,
        "/api/v1/education",
        Some(&token),
        json!({ "title": "BSc CS", "organisation": "Uni", "start_date": "2016-09-01" }),
    )
    .await;

    let education = expect_json(get(&app, "/api/v1/education", Some(&token)).await, StatusCode::OK).await;
    assert_eq!(education.as_array().unwrap().len(), 1);

    let experience = expect_json(get(&app, "/api/v1/experience", Some(&token)).await, StatusCode::OK).await;
    assert_eq!(experience.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_counts_reflect_content(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    post_json(&app, "/api/v1/projects", Some(&token), json!({ "title": "One" })).await;
    post_json(
        &app,
        "/api/v1/projects",
        Some(&token),
        json!({ "title": "Two", "status": "published" }),
    )
    .await;
    post_json(
        &app,
        "/api/v1/contact",
        None,
        json!({ "name": "Visitor", "email": "v@example.com", "message": "Hi" }),
    )
    .await;

    let body = expect_json(get(&app, "/api/v1/dashboard", Some(&token)).await, StatusCode::OK).await;
    let counts = &body["data"]["counts"];
    assert_eq!(counts["projects_total"], 2);
    assert_eq!(counts["projects_published"], 1);
    assert_eq!(counts["messages_total"], 1);
    assert_eq!(counts["messages_unread"], 1);

    assert_eq!(body["data"]["recent_messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["recent_projects"].as_array().unwrap().len(), 2);
}
