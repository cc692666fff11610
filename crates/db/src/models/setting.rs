//! Site setting and section visibility models and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A key/value row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}

/// DTO for upserting a site setting value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSetting {
    pub value: String,
}

/// A section flag row from the `section_visibility` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SectionVisibility {
    pub id: DbId,
    /// Named public-site section, e.g. `"hero"`, `"testimonials"`.
    pub section: String,
    pub is_visible: bool,
    pub updated_at: Timestamp,
}

/// DTO for setting a section's visibility.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSectionVisibility {
    pub is_visible: bool,
}
