//! Project and project-image models and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub category_id: Option<DbId>,
    pub project_url: Option<String>,
    pub repo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    /// One of `draft`, `published`, `archived`.
    pub status: String,
    pub is_featured: bool,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub category_id: Option<DbId>,
    pub project_url: Option<String>,
    pub repo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub category_id: Option<DbId>,
    pub project_url: Option<String>,
    pub repo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// A gallery image row from the `project_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
}

/// DTO for attaching an image to a project.
///
/// `project_id` is overridden from the URL path by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectImage {
    #[serde(default)]
    pub project_id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub display_order: Option<i32>,
}

/// A project together with its gallery, as served to the public site.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithImages {
    #[serde(flatten)]
    pub project: Project,
    pub images: Vec<ProjectImage>,
}
