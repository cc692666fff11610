//! Periodic database keep-alive pinger.
//!
//! Managed Postgres providers on free tiers pause databases that see no
//! traffic for a while. This task issues a trivial query on an interval
//! so the database stays warm between visitor requests.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Run the keep-alive loop until `cancel` fires.
///
/// An `interval_secs` of `0` disables the task entirely. Ping failures
/// are logged and the loop keeps going; a transient outage should not
/// kill the pinger that exists to prevent outages.
pub async fn run(pool: folio_db::DbPool, interval_secs: u64, cancel: CancellationToken) {
    if interval_secs == 0 {
        tracing::info!("Keep-alive task disabled (interval is 0)");
        return;
    }

    tracing::info!(interval_secs, "Keep-alive task started");
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    // The first tick fires immediately; skip it so startup already
    // verified connectivity and the first ping lands one interval later.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match folio_db::health_check(&pool).await {
                    Ok(()) => tracing::debug!("Keep-alive ping succeeded"),
                    Err(e) => tracing::warn!(error = %e, "Keep-alive ping failed"),
                }
            }
            () = cancel.cancelled() => {
                tracing::info!("Keep-alive task shutting down");
                return;
            }
        }
    }
}
