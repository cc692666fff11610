//! Domain error taxonomy.
//!
//! Only the failures this CMS actually produces: missing rows, rejected
//! input, and the two authentication outcomes. The HTTP layer owns the
//! mapping to status codes; these variants record what went wrong in
//! domain terms and their `Display` text is what clients see.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by primary key came up empty.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// Client-supplied data broke a domain rule (contact form fields,
    /// proficiency range, date ordering, upload constraints).
    #[error("{0}")]
    Validation(String),

    /// Missing or unusable credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed: disabled or locked account.
    #[error("{0}")]
    Forbidden(String),
}
