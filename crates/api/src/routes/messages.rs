use axum::routing::{get, put};
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(message::list))
        .route("/messages/unread-count", get(message::unread_count))
        .route(
            "/messages/{id}",
            get(message::get).delete(message::delete),
        )
        .route("/messages/{id}/read", put(message::set_read))
}
