//! Bearer-token authentication extractor.
//!
//! Admin handlers take an [`AuthUser`] argument; its `FromRequestParts`
//! impl parses and validates the `Authorization: Bearer <jwt>` header, so
//! a route is protected simply by listing the extractor in its signature.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated admin extracted from a valid access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".to_string(),
                ))
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Authorization header must be a Bearer token".to_string(),
            ))
        })?;

        let claims = jwt::validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Access token rejected");
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
