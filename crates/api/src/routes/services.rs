use axum::routing::get;
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(service::list).post(service::create))
        .route(
            "/services/{id}",
            get(service::get).put(service::update).delete(service::delete),
        )
}
