//! Repositories for the `site_settings` and `section_visibility` tables.
//!
//! Both are keyed tables with upsert semantics: the admin panel writes by
//! key/section name, never by row id.

use sqlx::PgPool;

use crate::models::setting::{SectionVisibility, SiteSetting};

/// Column list shared across queries to avoid repetition.
const SETTING_COLUMNS: &str = "id, key, value, updated_at";

const SECTION_COLUMNS: &str = "id, section, is_visible, updated_at";

/// Provides operations for site settings.
pub struct SiteSettingRepo;

impl SiteSettingRepo {
    /// List all settings ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {SETTING_COLUMNS} FROM site_settings ORDER BY key ASC");
        sqlx::query_as::<_, SiteSetting>(&query).fetch_all(pool).await
    }

    /// Find a setting by key.
    pub async fn find_by_key(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {SETTING_COLUMNS} FROM site_settings WHERE key = $1");
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update a setting by key, returning the stored row.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: &str,
    ) -> Result<SiteSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (key, value)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_site_settings_key
             DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
             RETURNING {SETTING_COLUMNS}"
        );
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(key)
            .bind(value)
            .fetch_one(pool)
            .await
    }
}

/// Provides operations for section visibility flags.
pub struct SectionVisibilityRepo;

impl SectionVisibilityRepo {
    /// List all section flags ordered by section name.
    pub async fn list(pool: &PgPool) -> Result<Vec<SectionVisibility>, sqlx::Error> {
        let query =
            format!("SELECT {SECTION_COLUMNS} FROM section_visibility ORDER BY section ASC");
        sqlx::query_as::<_, SectionVisibility>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a section flag by its section name.
    pub async fn find_by_section(
        pool: &PgPool,
        section: &str,
    ) -> Result<Option<SectionVisibility>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM section_visibility WHERE section = $1");
        sqlx::query_as::<_, SectionVisibility>(&query)
            .bind(section)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update a section flag, returning the stored row.
    pub async fn set(
        pool: &PgPool,
        section: &str,
        is_visible: bool,
    ) -> Result<SectionVisibility, sqlx::Error> {
        let query = format!(
            "INSERT INTO section_visibility (section, is_visible)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_section_visibility_section
             DO UPDATE SET is_visible = EXCLUDED.is_visible, updated_at = NOW()
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, SectionVisibility>(&query)
            .bind(section)
            .bind(is_visible)
            .fetch_one(pool)
            .await
    }
}
