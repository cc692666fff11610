//! Admin CRUD handlers for testimonials.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use folio_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

fn validate_rating(rating: Option<i32>) -> AppResult<()> {
    if let Some(r) = rating {
        if !(1..=5).contains(&r) {
            return Err(AppError::Core(CoreError::Validation(
                "rating must be between 1 and 5".to_string(),
            )));
        }
    }
    Ok(())
}

/// GET /api/v1/testimonials
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(TestimonialRepo::list(&state.pool).await?))
}

/// GET /api/v1/testimonials/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(testimonial))
}

/// POST /api/v1/testimonials
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    validate_rating(input.rating)?;
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /api/v1/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    validate_rating(input.rating)?;
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(testimonial))
}

/// DELETE /api/v1/testimonials/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
