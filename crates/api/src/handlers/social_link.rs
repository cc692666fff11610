//! Admin CRUD handlers for social links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::social_link::{CreateSocialLink, SocialLink, UpdateSocialLink};
use folio_db::repositories::SocialLinkRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/v1/social-links
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<SocialLink>>> {
    Ok(Json(SocialLinkRepo::list(&state.pool).await?))
}

/// GET /api/v1/social-links/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<SocialLink>> {
    let link = SocialLinkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SocialLink",
            id,
        }))?;
    Ok(Json(link))
}

/// POST /api/v1/social-links
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateSocialLink>,
) -> AppResult<(StatusCode, Json<SocialLink>)> {
    let link = SocialLinkRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// PUT /api/v1/social-links/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSocialLink>,
) -> AppResult<Json<SocialLink>> {
    let link = SocialLinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SocialLink",
            id,
        }))?;
    Ok(Json(link))
}

/// DELETE /api/v1/social-links/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SocialLinkRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SocialLink",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
