//! Admin CRUD handlers for experience and education entries.
//!
//! One set of handler functions serves both tables; the route layer binds
//! each path to the right [`ResumeTable`] via thin wrappers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::resume::{CreateResumeEntry, ResumeEntry, UpdateResumeEntry};
use folio_db::repositories::{ResumeRepo, ResumeTable};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn validate_dates(start: chrono::NaiveDate, end: Option<chrono::NaiveDate>) -> AppResult<()> {
    if let Some(end) = end {
        if end < start {
            return Err(AppError::Core(CoreError::Validation(
                "end_date must not be before start_date".to_string(),
            )));
        }
    }
    Ok(())
}

pub async fn list(state: &AppState, table: ResumeTable) -> AppResult<Json<Vec<ResumeEntry>>> {
    Ok(Json(ResumeRepo::list(&state.pool, table).await?))
}

pub async fn get(state: &AppState, table: ResumeTable, id: DbId) -> AppResult<Json<ResumeEntry>> {
    let entry = ResumeRepo::find_by_id(&state.pool, table, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: table.entity(),
            id,
        }))?;
    Ok(Json(entry))
}

pub async fn create(
    state: &AppState,
    table: ResumeTable,
    input: CreateResumeEntry,
) -> AppResult<(StatusCode, Json<ResumeEntry>)> {
    validate_dates(input.start_date, input.end_date)?;
    let entry = ResumeRepo::create(&state.pool, table, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update(
    state: &AppState,
    table: ResumeTable,
    id: DbId,
    input: UpdateResumeEntry,
) -> AppResult<Json<ResumeEntry>> {
    if let (Some(start), Some(end)) = (input.start_date, input.end_date) {
        validate_dates(start, Some(end))?;
    }
    let entry = ResumeRepo::update(&state.pool, table, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: table.entity(),
            id,
        }))?;
    Ok(Json(entry))
}

pub async fn delete(state: &AppState, table: ResumeTable, id: DbId) -> AppResult<StatusCode> {
    if !ResumeRepo::delete(&state.pool, table, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: table.entity(),
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// -- Experience wrappers --

pub async fn list_experience(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
) -> AppResult<Json<Vec<ResumeEntry>>> {
    list(&state, ResumeTable::Experience).await
}

pub async fn get_experience(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ResumeEntry>> {
    get(&state, ResumeTable::Experience, id).await
}

pub async fn create_experience(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Json(input): Json<CreateResumeEntry>,
) -> AppResult<(StatusCode, Json<ResumeEntry>)> {
    create(&state, ResumeTable::Experience, input).await
}

pub async fn update_experience(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResumeEntry>,
) -> AppResult<Json<ResumeEntry>> {
    update(&state, ResumeTable::Experience, id, input).await
}

pub async fn delete_experience(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete(&state, ResumeTable::Experience, id).await
}

// -- Education wrappers --

pub async fn list_education(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
) -> AppResult<Json<Vec<ResumeEntry>>> {
    list(&state, ResumeTable::Education).await
}

pub async fn get_education(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ResumeEntry>> {
    get(&state, ResumeTable::Education, id).await
}

pub async fn create_education(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Json(input): Json<CreateResumeEntry>,
) -> AppResult<(StatusCode, Json<ResumeEntry>)> {
    create(&state, ResumeTable::Education, input).await
}

pub async fn update_education(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResumeEntry>,
) -> AppResult<Json<ResumeEntry>> {
    update(&state, ResumeTable::Education, id, input).await
}

pub async fn delete_education(
    State(state): State<AppState>,
    _auth: crate::middleware::AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete(&state, ResumeTable::Education, id).await
}
