//! Request-level middleware and extractors.

pub mod auth;

pub use auth::AuthUser;
