mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{admin_token, build_test_app, expect_json, get, post_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn short_queries_return_empty_without_error(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    for q in ["", "a", "%20"] {
        let uri = format!("/api/v1/search?q={q}");
        let body = expect_json(get(&app, &uri, Some(&token)).await, StatusCode::OK).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0, "query {q:?}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hits_come_back_in_the_uniform_shape(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/projects",
        Some(&token),
        json!({ "title": "Rust CMS", "description": "portfolio backend" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = expect_json(
        get(&app, "/api/v1/search?q=rust", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);

    let hit = &hits[0];
    assert_eq!(hit["type"], "project");
    assert!(hit["id"].is_i64());
    assert_eq!(hit["title"], "Rust CMS");
    assert_eq!(hit["status"], "draft");
    assert!(hit["date"].is_string());
    assert!(hit["url"].as_str().unwrap().starts_with("/admin/projects/"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_spans_multiple_entity_types(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    post_json(
        &app,
        "/api/v1/projects",
        Some(&token),
        json!({ "title": "Actix rewrite" }),
    )
    .await;
    post_json(
        &app,
        "/api/v1/skills",
        Some(&token),
        json!({ "name": "Actix", "proficiency_pct": 80 }),
    )
    .await;
    post_json(
        &app,
        "/api/v1/services",
        Some(&token),
        json!({ "title": "Consulting", "description": "actix and axum services" }),
    )
    .await;

    let body = expect_json(
        get(&app, "/api/v1/search?q=actix", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    let kinds: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["type"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"project"));
    assert!(kinds.contains(&"skill"));
    assert!(kinds.contains(&"service"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn title_matches_rank_before_description_matches(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    // Description-only match inserted first so raw merge order would
    // put it ahead.
    post_json(
        &app,
        "/api/v1/projects",
        Some(&token),
        json!({ "title": "Admin panel", "description": "written in tokio rust" }),
    )
    .await;
    post_json(
        &app,
        "/api/v1/projects",
        Some(&token),
        json!({ "title": "Tokio pipeline" }),
    )
    .await;

    let body = expect_json(
        get(&app, "/api/v1/search?q=tokio", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits[0]["title"], "Tokio pipeline");
    assert_eq!(hits[1]["title"], "Admin panel");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn no_content_match_falls_back_to_the_page_index(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let body = expect_json(
        get(&app, "/api/v1/search?q=testimon", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    let hits = body["data"].as_array().unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h["type"] == "page"));
    assert!(hits.iter().all(|h| h["id"].is_null()));
    assert!(hits.iter().any(|h| h["title"] == "Testimonials"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn like_wildcards_in_the_query_match_literally(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    post_json(
        &app,
        "/api/v1/projects",
        Some(&token),
        json!({ "title": "Progress 50% done" }),
    )
    .await;
    post_json(
        &app,
        "/api/v1/projects",
        Some(&token),
        json!({ "title": "Another project" }),
    )
    .await;

    // `%` must not act as a wildcard; only the literal-percent title matches.
    let body = expect_json(
        get(&app, "/api/v1/search?q=50%25", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Progress 50% done");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn results_are_capped_at_twenty(pool: sqlx::PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    // 15 projects + 15 services all matching, fan-out caps each table at
    // 10 and the merged list truncates to 20.
    for i in 0..15 {
        post_json(
            &app,
            "/api/v1/projects",
            Some(&token),
            json!({ "title": format!("widget project {i}") }),
        )
        .await;
        post_json(
            &app,
            "/api/v1/services",
            Some(&token),
            json!({ "title": format!("widget service {i}") }),
        )
        .await;
    }

    let body = expect_json(
        get(&app, "/api/v1/search?q=widget", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 20);
}
