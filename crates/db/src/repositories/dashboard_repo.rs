//! Count queries backing the admin dashboard summary.

use sqlx::PgPool;

/// Aggregate content counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentCounts {
    pub projects_total: i64,
    pub projects_published: i64,
    pub messages_total: i64,
    pub messages_unread: i64,
    pub testimonials_pending: i64,
    pub services_active: i64,
    pub skills_active: i64,
}

/// Provides the dashboard aggregation queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Fetch all content counts.
    ///
    /// Issued as one statement rather than seven round-trips; the counts
    /// are cheap scalar subqueries over small tables.
    pub async fn content_counts(pool: &PgPool) -> Result<ContentCounts, sqlx::Error> {
        let row: (i64, i64, i64, i64, i64, i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM projects),
                (SELECT COUNT(*) FROM projects WHERE status = 'published'),
                (SELECT COUNT(*) FROM contact_messages),
                (SELECT COUNT(*) FROM contact_messages WHERE is_read = false),
                (SELECT COUNT(*) FROM testimonials WHERE is_approved = false),
                (SELECT COUNT(*) FROM services WHERE is_active = true),
                (SELECT COUNT(*) FROM skills WHERE is_active = true)",
        )
        .fetch_one(pool)
        .await?;

        Ok(ContentCounts {
            projects_total: row.0,
            projects_published: row.1,
            messages_total: row.2,
            messages_unread: row.3,
            testimonials_pending: row.4,
            services_active: row.5,
            skills_active: row.6,
        })
    }
}
