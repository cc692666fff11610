use axum::routing::{get, put};
use axum::Router;

use crate::handlers::setting;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(setting::list_settings))
        .route("/settings/{key}", put(setting::upsert_setting))
        .route("/sections", get(setting::list_sections))
        .route("/sections/{section}", put(setting::set_section))
}
