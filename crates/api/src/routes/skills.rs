use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skill;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/skills", get(skill::list).post(skill::create))
        .route(
            "/skills/{id}",
            get(skill::get).put(skill::update).delete(skill::delete),
        )
        .route(
            "/floating-skills",
            get(skill::list_floating).post(skill::create_floating),
        )
        .route(
            "/floating-skills/{id}",
            put(skill::update_floating).delete(skill::delete_floating),
        )
}
