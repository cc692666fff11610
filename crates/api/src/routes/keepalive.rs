use axum::routing::get;
use axum::Router;

use crate::handlers::keepalive;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // Uptime monitors vary; accept both verbs.
    Router::new().route("/keepalive", get(keepalive::ping).post(keepalive::ping))
}
