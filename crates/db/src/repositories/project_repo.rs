//! Repositories for the `projects` and `project_images` tables.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, CreateProjectImage, Project, ProjectImage, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, long_description, category_id, project_url, \
                       repo_url, thumbnail_url, status, is_featured, display_order, is_active, \
                       created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, project_id, image_url, caption, display_order, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `draft`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, long_description, category_id,
                                   project_url, repo_url, thumbnail_url, status,
                                   is_featured, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 'draft'),
                     COALESCE($9, false), COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(input.category_id)
            .bind(&input.project_url)
            .bind(&input.repo_url)
            .bind(&input.thumbnail_url)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by display order, newest first within ties.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List published, active projects for the public site.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE status = 'published' AND is_active = true
             ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Find a published, active project by ID (public detail page).
    pub async fn find_published_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE id = $1 AND status = 'published' AND is_active = true"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The most recently created projects, capped at `limit` (dashboard widget).
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List featured published projects, capped at `limit`.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE status = 'published' AND is_active = true AND is_featured = true
             ORDER BY display_order ASC, created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                long_description = COALESCE($4, long_description),
                category_id = COALESCE($5, category_id),
                project_url = COALESCE($6, project_url),
                repo_url = COALESCE($7, repo_url),
                thumbnail_url = COALESCE($8, thumbnail_url),
                status = COALESCE($9, status),
                is_featured = COALESCE($10, is_featured),
                display_order = COALESCE($11, display_order),
                is_active = COALESCE($12, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(input.category_id)
            .bind(&input.project_url)
            .bind(&input.repo_url)
            .bind(&input.thumbnail_url)
            .bind(&input.status)
            .bind(input.is_featured)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Gallery images cascade; nothing else is
    /// touched. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for project gallery images.
pub struct ProjectImageRepo;

impl ProjectImageRepo {
    /// Attach an image to a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectImage,
    ) -> Result<ProjectImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_images (project_id, image_url, caption, display_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(input.project_id)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// List all images for a project, in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM project_images
             WHERE project_id = $1
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an image by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
