//! Domain layer for the folio portfolio CMS.
//!
//! Holds the shared type aliases, the error taxonomy, contact-form
//! validation, media helpers, the static admin page index, and the pure
//! search merge/rank logic. Everything here is independent of axum and
//! sqlx so it can be unit tested without a running server or database.

pub mod contact;
pub mod error;
pub mod media;
pub mod pages;
pub mod search;
pub mod types;
