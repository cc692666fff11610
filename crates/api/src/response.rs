//! Shared response envelope types for API handlers.
//!
//! Aggregate endpoints (search, dashboard, public pages) use a
//! `{ "data": ... }` envelope. Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!({ "data": ... })` for compile-time type safety and
//! consistent serialization. Plain CRUD endpoints return the entity
//! directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
