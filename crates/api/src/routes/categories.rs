use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list).post(category::create))
        .route(
            "/categories/{id}",
            get(category::get)
                .put(category::update)
                .delete(category::delete),
        )
}
