//! Admin handlers for the contact-message inbox.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contact_message::ContactMessage;
use folio_db::repositories::ContactMessageRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetReadRequest {
    pub is_read: bool,
}

/// GET /api/v1/messages
///
/// Unread messages come first, newest first within each group.
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<ContactMessage>>> {
    Ok(Json(ContactMessageRepo::list(&state.pool).await?))
}

/// GET /api/v1/messages/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;
    Ok(Json(message))
}

/// PUT /api/v1/messages/{id}/read
pub async fn set_read(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetReadRequest>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::set_read(&state.pool, id, input.is_read)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;
    Ok(Json(message))
}

/// GET /api/v1/messages/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let count = ContactMessageRepo::count_unread(&state.pool).await?;
    Ok(Json(serde_json::json!({ "unread": count })))
}

/// DELETE /api/v1/messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ContactMessageRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
