//! Login, token refresh, logout, and current-user handlers.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use folio_core::error::CoreError;
use folio_db::models::session::CreateSession;
use folio_db::models::user::UserInfo;
use folio_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::{jwt, password};
use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Failed attempts before the account is temporarily locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// How long a lockout lasts.
const LOCK_DURATION_MINS: i64 = 15;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// POST /api/v1/auth/login
///
/// Credential failures and unknown emails return the same message so the
/// endpoint does not confirm which addresses have accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".to_string()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".to_string(),
        )));
    }

    if let Some(until) = user.locked_until {
        if until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Account locked until {until}"
            ))));
        }
    }

    let verified = password::verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {e}")))?;

    if !verified {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if user.failed_login_count + 1 >= MAX_FAILED_ATTEMPTS {
            let until = Utc::now() + Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, until).await?;
            tracing::warn!(user_id = user.id, "Account locked after repeated failures");
        }
        return Err(invalid());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let access_token = jwt::generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = jwt::generate_refresh_token();
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at: Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Admin logged in");

    Ok(Json(TokenResponse {
        access_token,
        refresh_token,
        user: UserInfo::from(&user),
    }))
}

/// POST /api/v1/auth/refresh
///
/// Rotates the refresh token: the presented session is revoked and a new
/// one issued, so a stolen token stops working as soon as the legitimate
/// client refreshes.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<TokenResponse>> {
    let hash = jwt::hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".to_string(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account is no longer active".to_string()))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let access_token = jwt::generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = jwt::generate_refresh_token();
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at: Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days),
        },
    )
    .await?;

    Ok(Json(TokenResponse {
        access_token,
        refresh_token,
        user: UserInfo::from(&user),
    }))
}

/// POST /api/v1/auth/logout
///
/// Revokes every session for the authenticated user.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, revoked, "Admin logged out");
    Ok(Json(serde_json::json!({ "revoked_sessions": revoked })))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(UserInfo::from(&user)))
}
