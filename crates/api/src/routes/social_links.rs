use axum::routing::get;
use axum::Router;

use crate::handlers::social_link;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/social-links",
            get(social_link::list).post(social_link::create),
        )
        .route(
            "/social-links/{id}",
            get(social_link::get)
                .put(social_link::update)
                .delete(social_link::delete),
        )
}
