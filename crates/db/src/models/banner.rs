//! Banner image entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A banner row from the `banner_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BannerImage {
    pub id: DbId,
    pub title: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new banner image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBannerImage {
    pub title: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing banner image. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBannerImage {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
