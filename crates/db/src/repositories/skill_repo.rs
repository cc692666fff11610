//! Repositories for the `skills` and `floating_skills` tables.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{
    CreateFloatingSkill, CreateSkill, FloatingSkill, Skill, UpdateFloatingSkill, UpdateSkill,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, proficiency_pct, icon_url, display_order, is_active, created_at, updated_at";

const FLOATING_COLUMNS: &str = "id, name, icon_url, display_order, is_active, created_at";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, proficiency_pct, icon_url, display_order)
             VALUES ($1, COALESCE($2, 0), $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(input.proficiency_pct)
            .bind(&input.icon_url)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a skill by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all skills in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM skills ORDER BY display_order ASC, created_at DESC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// List active skills for the public site.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills WHERE is_active = true
             ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Update a skill. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name = COALESCE($2, name),
                proficiency_pct = COALESCE($3, proficiency_pct),
                icon_url = COALESCE($4, icon_url),
                display_order = COALESCE($5, display_order),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.proficiency_pct)
            .bind(&input.icon_url)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for floating skill icons.
pub struct FloatingSkillRepo;

impl FloatingSkillRepo {
    /// Insert a new floating skill icon, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFloatingSkill,
    ) -> Result<FloatingSkill, sqlx::Error> {
        let query = format!(
            "INSERT INTO floating_skills (name, icon_url, display_order)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {FLOATING_COLUMNS}"
        );
        sqlx::query_as::<_, FloatingSkill>(&query)
            .bind(&input.name)
            .bind(&input.icon_url)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// List all floating skill icons in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<FloatingSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {FLOATING_COLUMNS} FROM floating_skills
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, FloatingSkill>(&query)
            .fetch_all(pool)
            .await
    }

    /// List active floating skill icons for the public site.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<FloatingSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {FLOATING_COLUMNS} FROM floating_skills
             WHERE is_active = true
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, FloatingSkill>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a floating skill icon. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFloatingSkill,
    ) -> Result<Option<FloatingSkill>, sqlx::Error> {
        let query = format!(
            "UPDATE floating_skills SET
                name = COALESCE($2, name),
                icon_url = COALESCE($3, icon_url),
                display_order = COALESCE($4, display_order),
                is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {FLOATING_COLUMNS}"
        );
        sqlx::query_as::<_, FloatingSkill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.icon_url)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a floating skill icon by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM floating_skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
