//! Cross-entity admin search handler.
//!
//! Fan-out and merging live in `folio_db::repositories::SearchRepo`;
//! ranking, truncation, and the page-index fallback live in
//! `folio_core`. This handler just wires them together.

use axum::extract::{Query, State};
use axum::Json;
use folio_core::pages;
use folio_core::search::{self, SearchHit};
use folio_db::repositories::SearchRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /api/v1/search?q=...
///
/// Queries shorter than two characters return an empty result without
/// touching the database. When no content row matches, the static
/// admin-page index is filtered instead so the search box always leads
/// somewhere.
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<SearchHit>>>> {
    let query = params.q.trim();

    if !search::query_is_searchable(query) {
        return Ok(Json(DataResponse { data: Vec::new() }));
    }

    let mut hits = SearchRepo::search_all(&state.pool, query).await?;

    if hits.is_empty() {
        hits = pages::filter_pages(query);
    }

    let ranked = search::rank_hits(hits, query);
    Ok(Json(DataResponse { data: ranked }))
}
