use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/public/home", get(public::home))
        .route("/public/projects", get(public::projects))
        .route("/public/projects/{id}", get(public::project_detail))
}
