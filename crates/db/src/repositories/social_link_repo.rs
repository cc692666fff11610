//! Repository for the `social_links` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::social_link::{CreateSocialLink, SocialLink, UpdateSocialLink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, platform, url, icon, display_order, is_active, created_at, updated_at";

/// Provides CRUD operations for social links.
pub struct SocialLinkRepo;

impl SocialLinkRepo {
    /// Insert a new social link, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSocialLink,
    ) -> Result<SocialLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_links (platform, url, icon, display_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a social link by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SocialLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM social_links WHERE id = $1");
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all social links in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SocialLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM social_links ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, SocialLink>(&query).fetch_all(pool).await
    }

    /// List active social links for the public site.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<SocialLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM social_links WHERE is_active = true
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, SocialLink>(&query).fetch_all(pool).await
    }

    /// Update a social link. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSocialLink,
    ) -> Result<Option<SocialLink>, sqlx::Error> {
        let query = format!(
            "UPDATE social_links SET
                platform = COALESCE($2, platform),
                url = COALESCE($3, url),
                icon = COALESCE($4, icon),
                display_order = COALESCE($5, display_order),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(id)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a social link by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM social_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
