use axum::routing::get;
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/testimonials",
            get(testimonial::list).post(testimonial::create),
        )
        .route(
            "/testimonials/{id}",
            get(testimonial::get)
                .put(testimonial::update)
                .delete(testimonial::delete),
        )
}
