//! Social link entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A social link row from the `social_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialLink {
    pub id: DbId,
    /// Platform name, e.g. `"github"`, `"linkedin"`.
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new social link.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSocialLink {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing social link. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSocialLink {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
