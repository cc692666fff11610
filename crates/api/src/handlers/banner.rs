//! Admin CRUD handlers for banner images.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::banner::{BannerImage, CreateBannerImage, UpdateBannerImage};
use folio_db::repositories::BannerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/v1/banners
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<BannerImage>>> {
    Ok(Json(BannerRepo::list(&state.pool).await?))
}

/// GET /api/v1/banners/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BannerImage>> {
    let banner = BannerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Banner", id }))?;
    Ok(Json(banner))
}

/// POST /api/v1/banners
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateBannerImage>,
) -> AppResult<(StatusCode, Json<BannerImage>)> {
    let banner = BannerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(banner)))
}

/// PUT /api/v1/banners/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBannerImage>,
) -> AppResult<Json<BannerImage>> {
    let banner = BannerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Banner", id }))?;
    Ok(Json(banner))
}

/// DELETE /api/v1/banners/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BannerRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Banner", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
