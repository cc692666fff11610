use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get).put(project::update).delete(project::delete),
        )
        .route(
            "/projects/{id}/images",
            get(project::list_images).post(project::create_image),
        )
        .route(
            "/projects/{id}/images/{image_id}",
            delete(project::delete_image),
        )
}
