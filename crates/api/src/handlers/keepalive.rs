//! External keep-alive endpoint.
//!
//! Uptime monitors hit this route (GET or POST) to keep the hosting
//! platform's free-tier dyno and database awake. The handler issues one
//! cheap read so the ping exercises the whole stack, not just the HTTP
//! listener.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use folio_db::repositories::SiteSettingRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct KeepaliveResponse {
    pub status: &'static str,
    pub pinged_at: chrono::DateTime<Utc>,
}

/// GET | POST /api/v1/keepalive
pub async fn ping(State(state): State<AppState>) -> AppResult<Json<KeepaliveResponse>> {
    folio_db::health_check(&state.pool)
        .await
        .map_err(AppError::Database)?;

    // One real table read so a paused database actually wakes up.
    let _ = SiteSettingRepo::list(&state.pool).await?;

    Ok(Json(KeepaliveResponse {
        status: "ok",
        pinged_at: Utc::now(),
    }))
}
