//! Skill and floating-skill-icon models and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A skill row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub proficiency_pct: i32,
    pub icon_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new skill.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub proficiency_pct: Option<i32>,
    pub icon_url: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing skill. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub proficiency_pct: Option<i32>,
    pub icon_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// A decorative floating icon row from the `floating_skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FloatingSkill {
    pub id: DbId,
    pub name: String,
    pub icon_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a floating skill icon.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFloatingSkill {
    pub name: String,
    pub icon_url: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating a floating skill icon.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFloatingSkill {
    pub name: Option<String>,
    pub icon_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
