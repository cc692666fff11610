//! Service entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A service row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// Icon identifier understood by the frontend (e.g. a lucide name).
    pub icon: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing service. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
