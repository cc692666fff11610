//! Repository for the `contact_messages` table.

use folio_core::contact::ContactSubmission;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_message::ContactMessage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, subject, message, is_read, created_at";

/// Provides operations for contact messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Persist a validated contact submission. `is_read` defaults to false.
    pub async fn create(
        pool: &PgPool,
        input: &ContactSubmission,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a message by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages WHERE id = $1");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List messages, newest first, unread before read.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_messages
             ORDER BY is_read ASC, created_at DESC"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// The most recent messages, capped at `limit` (dashboard widget).
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Mark a message read or unread, returning the updated row.
    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        is_read: bool,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_messages SET is_read = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }

    /// Count unread messages.
    pub async fn count_unread(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE is_read = false")
            .fetch_one(pool)
            .await
    }

    /// Delete a message by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
