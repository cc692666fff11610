//! Periodic cleanup of dead refresh-token sessions.
//!
//! Every login and every refresh inserts a `user_sessions` row, and
//! revocation only flips a flag, so without cleanup the table grows
//! forever. This task deletes revoked and expired rows: once at startup,
//! then once per interval.

use std::time::Duration;

use folio_db::repositories::SessionRepo;
use tokio_util::sync::CancellationToken;

/// How often dead sessions are purged.
pub const PURGE_INTERVAL: Duration = Duration::from_secs(3600);

/// Run the session purge loop until `cancel` fires.
///
/// Purge failures are logged and the loop keeps going; the rows stay
/// harmless until the next pass.
pub async fn run(pool: folio_db::DbPool, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Session retention task started"
    );
    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match SessionRepo::purge_stale(&pool).await {
                    Ok(0) => tracing::debug!("Session retention: nothing to purge"),
                    Ok(deleted) => {
                        tracing::info!(deleted, "Session retention: purged dead sessions");
                    }
                    Err(e) => tracing::error!(error = %e, "Session retention: purge failed"),
                }
            }
            () = cancel.cancelled() => {
                tracing::info!("Session retention task shutting down");
                return;
            }
        }
    }
}
