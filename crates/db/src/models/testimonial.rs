//! Testimonial entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A testimonial row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author_name: String,
    pub author_title: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    /// 1-5 star rating, if given.
    pub rating: Option<i32>,
    /// Only approved testimonials appear on the public site.
    pub is_approved: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub author_name: String,
    pub author_title: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub rating: Option<i32>,
    pub is_approved: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing testimonial. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTestimonial {
    pub author_name: Option<String>,
    pub author_title: Option<String>,
    pub quote: Option<String>,
    pub avatar_url: Option<String>,
    pub rating: Option<i32>,
    pub is_approved: Option<bool>,
    pub display_order: Option<i32>,
}
