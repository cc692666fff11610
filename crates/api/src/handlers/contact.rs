//! Public contact-form submission handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::contact::ContactSubmission;
use folio_db::models::contact_message::ContactMessage;
use folio_db::repositories::ContactMessageRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// The only unauthenticated write path. Input is validated and trimmed
/// before it touches the database; the stored message starts unread.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    let cleaned = input.validated()?;
    let message = ContactMessageRepo::create(&state.pool, &cleaned).await?;
    tracing::info!(message_id = message.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(message)))
}
