//! First-run admin account provisioning.
//!
//! A fresh deployment starts with an empty `users` table and there is no
//! signup flow, so the binary creates the initial admin from
//! `ADMIN_EMAIL` / `ADMIN_PASSWORD` at startup. The step is idempotent:
//! an existing account with that email is left untouched (in particular
//! its password is not reset), so the variables can stay set across
//! restarts.

use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use folio_db::DbPool;

use crate::auth::password;
use crate::error::{AppError, AppResult};

/// Create the admin account named by `ADMIN_EMAIL` / `ADMIN_PASSWORD`,
/// if it does not exist yet. A no-op when either variable is unset.
pub async fn ensure_admin_from_env(pool: &DbPool) -> AppResult<()> {
    let (email, pw) = match (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(pw)) if !email.is_empty() && !pw.is_empty() => (email, pw),
        _ => {
            tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
            return Ok(());
        }
    };
    ensure_admin(pool, &email, &pw).await
}

/// Idempotently create an active admin account with the given credentials.
pub async fn ensure_admin(pool: &DbPool, email: &str, plain_password: &str) -> AppResult<()> {
    if UserRepo::find_by_email(pool, email).await?.is_some() {
        tracing::debug!(%email, "Admin account already present");
        return Ok(());
    }

    let password_hash = password::hash_password(plain_password)
        .map_err(|e| AppError::Internal(format!("Failed to hash admin password: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
            display_name: "Admin".to_string(),
            role: "admin".to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Bootstrapped initial admin account");
    Ok(())
}
