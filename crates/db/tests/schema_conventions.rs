//! Schema-wide convention checks: every mutable table keeps `updated_at`
//! fresh through the shared trigger, and the seed migration leaves the
//! keyed tables populated.

use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::{ProjectRepo, SectionVisibilityRepo, SiteSettingRepo};

fn minimal_project() -> CreateProject {
    CreateProject {
        title: "Trigger check".to_string(),
        description: None,
        long_description: None,
        category_id: None,
        project_url: None,
        repo_url: None,
        thumbnail_url: None,
        status: None,
        is_featured: None,
        display_order: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn updated_at_advances_on_update(pool: sqlx::PgPool) {
    let created = ProjectRepo::create(&pool, &minimal_project())
        .await
        .expect("create project");
    assert_eq!(created.created_at, created.updated_at);

    // NOW() is per-transaction; a separate statement gets a later clock.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let updated = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            title: Some("Renamed".to_string()),
            description: None,
            long_description: None,
            category_id: None,
            project_url: None,
            repo_url: None,
            thumbnail_url: None,
            status: None,
            is_featured: None,
            display_order: None,
            is_active: None,
        },
    )
    .await
    .expect("update project")
    .expect("project exists");

    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn seed_migration_populates_settings_and_sections(pool: sqlx::PgPool) {
    let settings = SiteSettingRepo::list(&pool).await.expect("list settings");
    assert!(settings.iter().any(|s| s.key == "site_title"));

    let sections = SectionVisibilityRepo::list(&pool).await.expect("list sections");
    let expected = [
        "banner",
        "contact",
        "experience",
        "hero",
        "projects",
        "services",
        "skills",
        "testimonials",
    ];
    let names: Vec<&str> = sections.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(names, expected, "sections are seeded and sorted by name");
    assert!(sections.iter().all(|s| s.is_visible));
}

#[sqlx::test(migrations = "./migrations")]
async fn setting_upsert_is_idempotent_per_key(pool: sqlx::PgPool) {
    let first = SiteSettingRepo::upsert(&pool, "tagline", "Building things")
        .await
        .expect("first upsert");
    let second = SiteSettingRepo::upsert(&pool, "tagline", "Shipping things")
        .await
        .expect("second upsert");

    // Same row, new value.
    assert_eq!(first.id, second.id);
    assert_eq!(second.value, "Shipping things");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM site_settings WHERE key = 'tagline'")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count, 1);
}
