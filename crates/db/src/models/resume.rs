//! Experience and education entry models and DTOs.
//!
//! Both tables share the same shape (a dated, ordered CV entry), so they
//! share one set of structs; the repository picks the table.

use chrono::NaiveDate;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `experience_entries` or `education_entries`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResumeEntry {
    pub id: DbId,
    /// Role title for experience, degree name for education.
    pub title: String,
    /// Employer for experience, institution for education.
    pub organisation: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    /// `None` means ongoing.
    pub end_date: Option<NaiveDate>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a resume entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResumeEntry {
    pub title: String,
    pub organisation: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub display_order: Option<i32>,
}

/// DTO for updating a resume entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResumeEntry {
    pub title: Option<String>,
    pub organisation: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
