//! Pure merge/rank logic for the admin-wide search aggregator.
//!
//! The database fan-out lives in `folio-db`; everything here operates on
//! already-fetched [`SearchHit`] values so ordering and truncation rules
//! can be tested without a database.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Queries shorter than this never touch the database.
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum number of hits returned to the client.
pub const MAX_RESULTS: usize = 20;

/// Per-table row cap for the fan-out queries.
pub const PER_TABLE_LIMIT: i64 = 10;

/// A single search result in the uniform cross-entity shape.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Entity kind, e.g. `"project"`, `"service"`, `"page"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Database id; `None` for static page-index hits.
    pub id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<Timestamp>,
    pub status: Option<String>,
    /// Admin-panel path where the entity can be edited.
    pub url: String,
}

/// Rank merged hits and truncate to [`MAX_RESULTS`].
///
/// Hits whose title contains the query (case-insensitive) sort first.
/// The sort is stable, so within each group the original merge order
/// (i.e. per-table fetch order) is preserved.
pub fn rank_hits(mut hits: Vec<SearchHit>, query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    hits.sort_by_key(|hit| !hit.title.to_lowercase().contains(&needle));
    hits.truncate(MAX_RESULTS);
    hits
}

/// Whether a query is long enough to run at all.
pub fn query_is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(kind: &'static str, title: &str, description: Option<&str>) -> SearchHit {
        SearchHit {
            kind,
            id: Some(1),
            title: title.to_string(),
            description: description.map(String::from),
            date: None,
            status: None,
            url: format!("/admin/{kind}"),
        }
    }

    #[test]
    fn title_matches_sort_before_description_matches() {
        let hits = vec![
            hit("service", "Web Development", Some("rust portfolio work")),
            hit("project", "Rust CMS", None),
            hit("skill", "PostgreSQL", Some("database and rust tooling")),
        ];
        let ranked = rank_hits(hits, "rust");
        assert_eq!(ranked[0].title, "Rust CMS");
        // Stable: remaining hits keep their merge order.
        assert_eq!(ranked[1].title, "Web Development");
        assert_eq!(ranked[2].title, "PostgreSQL");
    }

    #[test]
    fn ranking_is_case_insensitive() {
        let hits = vec![
            hit("service", "something else", None),
            hit("project", "RUST toolchain", None),
        ];
        let ranked = rank_hits(hits, "rust");
        assert_eq!(ranked[0].title, "RUST toolchain");
    }

    #[test]
    fn results_are_truncated_to_max() {
        let hits: Vec<SearchHit> = (0..40)
            .map(|i| hit("project", &format!("match {i}"), None))
            .collect();
        let ranked = rank_hits(hits, "match");
        assert_eq!(ranked.len(), MAX_RESULTS);
    }

    #[test]
    fn short_queries_are_not_searchable() {
        assert!(!query_is_searchable(""));
        assert!(!query_is_searchable("a"));
        assert!(!query_is_searchable(" a "));
        assert!(query_is_searchable("ab"));
    }
}
