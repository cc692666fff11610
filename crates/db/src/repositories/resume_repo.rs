//! Repository for the `experience_entries` and `education_entries` tables.
//!
//! Both tables share a schema, so one repository serves both; callers
//! select the table with [`ResumeTable`].

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::resume::{CreateResumeEntry, ResumeEntry, UpdateResumeEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, organisation, location, description, start_date, end_date, \
                       display_order, is_active, created_at, updated_at";

/// Which CV table a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeTable {
    Experience,
    Education,
}

impl ResumeTable {
    /// The backing table name. Only ever interpolated from this enum,
    /// never from user input.
    fn name(self) -> &'static str {
        match self {
            ResumeTable::Experience => "experience_entries",
            ResumeTable::Education => "education_entries",
        }
    }

    /// Entity label used in 404 error messages.
    pub fn entity(self) -> &'static str {
        match self {
            ResumeTable::Experience => "ExperienceEntry",
            ResumeTable::Education => "EducationEntry",
        }
    }
}

/// Provides CRUD operations for experience and education entries.
pub struct ResumeRepo;

impl ResumeRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        table: ResumeTable,
        input: &CreateResumeEntry,
    ) -> Result<ResumeEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (title, organisation, location, description,
                                  start_date, end_date, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0))
             RETURNING {COLUMNS}",
            table = table.name()
        );
        sqlx::query_as::<_, ResumeEntry>(&query)
            .bind(&input.title)
            .bind(&input.organisation)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        table: ResumeTable,
        id: DbId,
    ) -> Result<Option<ResumeEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1",
            table = table.name()
        );
        sqlx::query_as::<_, ResumeEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries, display order first, then newest start date.
    pub async fn list(pool: &PgPool, table: ResumeTable) -> Result<Vec<ResumeEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table}
             ORDER BY display_order ASC, start_date DESC",
            table = table.name()
        );
        sqlx::query_as::<_, ResumeEntry>(&query).fetch_all(pool).await
    }

    /// List active entries for the public site.
    pub async fn list_active(
        pool: &PgPool,
        table: ResumeTable,
    ) -> Result<Vec<ResumeEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE is_active = true
             ORDER BY display_order ASC, start_date DESC",
            table = table.name()
        );
        sqlx::query_as::<_, ResumeEntry>(&query).fetch_all(pool).await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// `end_date` cannot be cleared back to `None` through this path; the
    /// admin panel deletes and recreates an entry to reopen it.
    pub async fn update(
        pool: &PgPool,
        table: ResumeTable,
        id: DbId,
        input: &UpdateResumeEntry,
    ) -> Result<Option<ResumeEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET
                title = COALESCE($2, title),
                organisation = COALESCE($3, organisation),
                location = COALESCE($4, location),
                description = COALESCE($5, description),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                display_order = COALESCE($8, display_order),
                is_active = COALESCE($9, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}",
            table = table.name()
        );
        sqlx::query_as::<_, ResumeEntry>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.organisation)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        table: ResumeTable,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {table} WHERE id = $1", table = table.name());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
