//! Long-running background tasks spawned by `main`.

pub mod keepalive;
pub mod retention;
