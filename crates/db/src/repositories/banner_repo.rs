//! Repository for the `banner_images` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::banner::{BannerImage, CreateBannerImage, UpdateBannerImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, image_url, link_url, display_order, is_active, created_at";

/// Provides CRUD operations for banner images.
pub struct BannerRepo;

impl BannerRepo {
    /// Insert a new banner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBannerImage,
    ) -> Result<BannerImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO banner_images (title, image_url, link_url, display_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BannerImage>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a banner by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BannerImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banner_images WHERE id = $1");
        sqlx::query_as::<_, BannerImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all banners in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<BannerImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banner_images ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, BannerImage>(&query).fetch_all(pool).await
    }

    /// List active banners for the public site.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<BannerImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banner_images WHERE is_active = true
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, BannerImage>(&query).fetch_all(pool).await
    }

    /// Update a banner. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBannerImage,
    ) -> Result<Option<BannerImage>, sqlx::Error> {
        let query = format!(
            "UPDATE banner_images SET
                title = COALESCE($2, title),
                image_url = COALESCE($3, image_url),
                link_url = COALESCE($4, link_url),
                display_order = COALESCE($5, display_order),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BannerImage>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a banner by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM banner_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
