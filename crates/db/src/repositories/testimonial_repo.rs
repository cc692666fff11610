//! Repository for the `testimonials` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_name, author_title, quote, avatar_url, rating, is_approved, \
                       display_order, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row.
    ///
    /// New testimonials default to unapproved so they never leak onto the
    /// public site before review.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (author_name, author_title, quote, avatar_url,
                                       rating, is_approved, display_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false), COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.author_name)
            .bind(&input.author_title)
            .bind(&input.quote)
            .bind(&input.avatar_url)
            .bind(input.rating)
            .bind(input.is_approved)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a testimonial by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all testimonials in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    /// List approved testimonials for the public site.
    pub async fn list_approved(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_approved = true
             ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    /// Update a testimonial. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                author_name = COALESCE($2, author_name),
                author_title = COALESCE($3, author_title),
                quote = COALESCE($4, quote),
                avatar_url = COALESCE($5, avatar_url),
                rating = COALESCE($6, rating),
                is_approved = COALESCE($7, is_approved),
                display_order = COALESCE($8, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.author_name)
            .bind(&input.author_title)
            .bind(&input.quote)
            .bind(&input.avatar_url)
            .bind(input.rating)
            .bind(input.is_approved)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
