//! Admin CRUD handlers for services.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::service::{CreateService, Service, UpdateService};
use folio_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/v1/services
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Service>>> {
    Ok(Json(ServiceRepo::list(&state.pool).await?))
}

/// GET /api/v1/services/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Service", id }))?;
    Ok(Json(service))
}

/// POST /api/v1/services
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let service = ServiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/v1/services/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Service", id }))?;
    Ok(Json(service))
}

/// DELETE /api/v1/services/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Service", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
