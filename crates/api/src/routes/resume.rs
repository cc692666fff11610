use axum::routing::get;
use axum::Router;

use crate::handlers::resume;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/experience",
            get(resume::list_experience).post(resume::create_experience),
        )
        .route(
            "/experience/{id}",
            get(resume::get_experience)
                .put(resume::update_experience)
                .delete(resume::delete_experience),
        )
        .route(
            "/education",
            get(resume::list_education).post(resume::create_education),
        )
        .route(
            "/education/{id}",
            get(resume::get_education)
                .put(resume::update_education)
                .delete(resume::delete_education),
        )
}
