//! Admin CRUD handlers for projects and their gallery images.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{
    CreateProject, CreateProjectImage, Project, ProjectImage, UpdateProject,
};
use folio_db::repositories::{ProjectImageRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(ProjectRepo::list(&state.pool).await?))
}

/// GET /api/v1/projects/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;
    Ok(Json(project))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Project", id }));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectImage>>> {
    // 404 for a missing parent rather than an empty gallery.
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;
    Ok(Json(ProjectImageRepo::list_by_project(&state.pool, id).await?))
}

/// POST /api/v1/projects/{id}/images
pub async fn create_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(mut input): Json<CreateProjectImage>,
) -> AppResult<(StatusCode, Json<ProjectImage>)> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;

    // The path is authoritative; ignore any project_id in the body.
    input.project_id = id;
    let image = ProjectImageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// DELETE /api/v1/projects/{id}/images/{image_id}
pub async fn delete_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((_id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if !ProjectImageRepo::delete(&state.pool, image_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectImage",
            id: image_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
