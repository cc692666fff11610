//! Admin CRUD handlers for skills and floating skill icons.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{
    CreateFloatingSkill, CreateSkill, FloatingSkill, Skill, UpdateFloatingSkill, UpdateSkill,
};
use folio_db::repositories::{FloatingSkillRepo, SkillRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/v1/skills
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Skill>>> {
    Ok(Json(SkillRepo::list(&state.pool).await?))
}

/// GET /api/v1/skills/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Skill>> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    Ok(Json(skill))
}

/// POST /api/v1/skills
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateSkill>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    if let Some(pct) = input.proficiency_pct {
        validate_proficiency(pct)?;
    }
    let skill = SkillRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /api/v1/skills/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<Json<Skill>> {
    if let Some(pct) = input.proficiency_pct {
        validate_proficiency(pct)?;
    }
    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    Ok(Json(skill))
}

/// DELETE /api/v1/skills/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SkillRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn validate_proficiency(pct: i32) -> AppResult<()> {
    if (0..=100).contains(&pct) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(
            "proficiency_pct must be between 0 and 100".to_string(),
        )))
    }
}

/// GET /api/v1/floating-skills
pub async fn list_floating(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<FloatingSkill>>> {
    Ok(Json(FloatingSkillRepo::list(&state.pool).await?))
}

/// POST /api/v1/floating-skills
pub async fn create_floating(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateFloatingSkill>,
) -> AppResult<(StatusCode, Json<FloatingSkill>)> {
    let skill = FloatingSkillRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /api/v1/floating-skills/{id}
pub async fn update_floating(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFloatingSkill>,
) -> AppResult<Json<FloatingSkill>> {
    let skill = FloatingSkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FloatingSkill",
            id,
        }))?;
    Ok(Json(skill))
}

/// DELETE /api/v1/floating-skills/{id}
pub async fn delete_floating(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !FloatingSkillRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FloatingSkill",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
