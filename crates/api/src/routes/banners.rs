use axum::routing::get;
use axum::Router;

use crate::handlers::banner;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/banners", get(banner::list).post(banner::create))
        .route(
            "/banners/{id}",
            get(banner::get).put(banner::update).delete(banner::delete),
        )
}
