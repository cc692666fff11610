//! Admin dashboard summary handler.

use axum::extract::State;
use axum::Json;
use folio_db::models::contact_message::ContactMessage;
use folio_db::models::project::Project;
use folio_db::repositories::{ContactMessageRepo, DashboardRepo, ProjectRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many recent rows each dashboard widget shows.
const RECENT_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
pub struct DashboardCounts {
    pub projects_total: i64,
    pub projects_published: i64,
    pub messages_total: i64,
    pub messages_unread: i64,
    pub testimonials_pending: i64,
    pub services_active: i64,
    pub skills_active: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub counts: DashboardCounts,
    pub recent_messages: Vec<ContactMessage>,
    pub recent_projects: Vec<Project>,
}

/// GET /api/v1/dashboard
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let (counts, recent_messages, recent_projects) = tokio::try_join!(
        DashboardRepo::content_counts(&state.pool),
        ContactMessageRepo::list_recent(&state.pool, RECENT_LIMIT),
        ProjectRepo::list_recent(&state.pool, RECENT_LIMIT),
    )?;

    Ok(Json(DataResponse {
        data: DashboardSummary {
            counts: DashboardCounts {
                projects_total: counts.projects_total,
                projects_published: counts.projects_published,
                messages_total: counts.messages_total,
                messages_unread: counts.messages_unread,
                testimonials_pending: counts.testimonials_pending,
                services_active: counts.services_active,
                skills_active: counts.skills_active,
            },
            recent_messages,
            recent_projects,
        },
    }))
}
