//! Admin handlers for site settings and section visibility.
//!
//! Both resources are keyed by name rather than id: the admin panel
//! writes `PUT /settings/{key}` and `PUT /sections/{section}` and the
//! row is created if it does not exist yet.

use axum::extract::{Path, State};
use axum::Json;
use folio_db::models::setting::{
    SectionVisibility, SetSectionVisibility, SiteSetting, UpsertSetting,
};
use folio_db::repositories::{SectionVisibilityRepo, SiteSettingRepo};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn list_settings(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<SiteSetting>>> {
    Ok(Json(SiteSettingRepo::list(&state.pool).await?))
}

/// PUT /api/v1/settings/{key}
pub async fn upsert_setting(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(key): Path<String>,
    Json(input): Json<UpsertSetting>,
) -> AppResult<Json<SiteSetting>> {
    let setting = SiteSettingRepo::upsert(&state.pool, &key, &input.value).await?;
    tracing::info!(key = %setting.key, "Site setting updated");
    Ok(Json(setting))
}

/// GET /api/v1/sections
pub async fn list_sections(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<SectionVisibility>>> {
    Ok(Json(SectionVisibilityRepo::list(&state.pool).await?))
}

/// PUT /api/v1/sections/{section}
pub async fn set_section(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(section): Path<String>,
    Json(input): Json<SetSectionVisibility>,
) -> AppResult<Json<SectionVisibility>> {
    let flag = SectionVisibilityRepo::set(&state.pool, &section, input.is_visible).await?;
    tracing::info!(section = %flag.section, is_visible = flag.is_visible, "Section visibility updated");
    Ok(Json(flag))
}
