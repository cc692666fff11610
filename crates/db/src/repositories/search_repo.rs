//! Cross-entity search fan-out.
//!
//! Issues one substring query per content table, all in parallel, and
//! maps every row into the uniform [`SearchHit`] shape. Ranking and
//! truncation happen in `folio_core::search`; this module only fetches
//! and merges.

use folio_core::search::{SearchHit, PER_TABLE_LIMIT};
use folio_core::types::{DbId, Timestamp};
use futures::future::join_all;
use sqlx::PgPool;

/// One fan-out target: entity kind, fetch SQL, and admin path prefix.
///
/// Every SQL statement selects the same five columns (id, title,
/// description, created_at, status) so rows decode into [`RawHit`]
/// regardless of source table. `$1` is the ILIKE pattern, `$2` the row cap.
struct TableSpec {
    kind: &'static str,
    sql: &'static str,
    path: &'static str,
}

/// (id, title, description, created_at, status)
type RawHit = (DbId, String, Option<String>, Timestamp, Option<String>);

/// The ten content tables the admin search covers.
const TABLES: &[TableSpec] = &[
    TableSpec {
        kind: "project",
        sql: "SELECT id, title, description, created_at, status
              FROM projects
              WHERE title ILIKE $1 OR description ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/projects",
    },
    TableSpec {
        kind: "service",
        sql: "SELECT id, title, description, created_at, NULL::TEXT AS status
              FROM services
              WHERE title ILIKE $1 OR description ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/services",
    },
    TableSpec {
        kind: "skill",
        sql: "SELECT id, name AS title, NULL::TEXT AS description, created_at,
                     NULL::TEXT AS status
              FROM skills
              WHERE name ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/skills",
    },
    TableSpec {
        kind: "floating_skill",
        sql: "SELECT id, name AS title, NULL::TEXT AS description, created_at,
                     NULL::TEXT AS status
              FROM floating_skills
              WHERE name ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/skills",
    },
    TableSpec {
        kind: "experience",
        sql: "SELECT id, title, organisation AS description, created_at,
                     NULL::TEXT AS status
              FROM experience_entries
              WHERE title ILIKE $1 OR organisation ILIKE $1 OR description ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/experience",
    },
    TableSpec {
        kind: "education",
        sql: "SELECT id, title, organisation AS description, created_at,
                     NULL::TEXT AS status
              FROM education_entries
              WHERE title ILIKE $1 OR organisation ILIKE $1 OR description ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/experience",
    },
    TableSpec {
        kind: "testimonial",
        sql: "SELECT id, author_name AS title, quote AS description, created_at,
                     CASE WHEN is_approved THEN 'approved' ELSE 'pending' END AS status
              FROM testimonials
              WHERE author_name ILIKE $1 OR quote ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/testimonials",
    },
    TableSpec {
        kind: "social_link",
        sql: "SELECT id, platform AS title, url AS description, created_at,
                     NULL::TEXT AS status
              FROM social_links
              WHERE platform ILIKE $1 OR url ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/social-links",
    },
    TableSpec {
        kind: "category",
        sql: "SELECT id, name AS title, slug AS description, created_at,
                     NULL::TEXT AS status
              FROM categories
              WHERE name ILIKE $1 OR slug ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/categories",
    },
    TableSpec {
        kind: "message",
        sql: "SELECT id, name AS title, message AS description, created_at,
                     CASE WHEN is_read THEN 'read' ELSE 'unread' END AS status
              FROM contact_messages
              WHERE name ILIKE $1 OR email ILIKE $1 OR message ILIKE $1
              ORDER BY created_at DESC LIMIT $2",
        path: "/admin/messages",
    },
];

/// Escape LIKE wildcards so a user query matches literally.
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Provides the cross-entity fan-out query.
pub struct SearchRepo;

impl SearchRepo {
    /// Run the substring query against every content table in parallel
    /// and merge the rows in table order.
    ///
    /// A failing table is logged and contributes no rows; only when every
    /// table fails is the first error propagated.
    pub async fn search_all(pool: &PgPool, query: &str) -> Result<Vec<SearchHit>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(query));

        let futures = TABLES.iter().map(|spec| {
            let pattern = pattern.clone();
            async move {
                let rows = sqlx::query_as::<_, RawHit>(spec.sql)
                    .bind(&pattern)
                    .bind(PER_TABLE_LIMIT)
                    .fetch_all(pool)
                    .await;
                (spec, rows)
            }
        });

        let mut hits = Vec::new();
        let mut first_error: Option<sqlx::Error> = None;
        let mut failures = 0usize;

        for (spec, result) in join_all(futures).await {
            match result {
                Ok(rows) => {
                    hits.extend(rows.into_iter().map(|(id, title, description, date, status)| {
                        SearchHit {
                            kind: spec.kind,
                            id: Some(id),
                            title,
                            description,
                            date: Some(date),
                            status,
                            url: format!("{}/{}", spec.path, id),
                        }
                    }));
                }
                Err(e) => {
                    tracing::warn!(table = spec.kind, error = %e, "Search query failed");
                    failures += 1;
                    first_error.get_or_insert(e);
                }
            }
        }

        if failures == TABLES.len() {
            // Unreachable without an error, but don't mask a logic bug
            // with a silent empty result.
            return Err(first_error
                .unwrap_or_else(|| sqlx::Error::Protocol("search fan-out produced no results".into())));
        }

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_done"), "50\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn fan_out_covers_ten_tables() {
        assert_eq!(TABLES.len(), 10);
    }
}
