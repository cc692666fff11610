use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/uploads", post(uploads::upload))
        .route("/uploads/{filename}", delete(uploads::delete))
}
