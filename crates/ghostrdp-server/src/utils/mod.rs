//! Utility functions and structures for the ghost-rdp backend.
//!
//! Holds the shutdown helper used by `serve`, the reachability probe behind
//! `/api/setup-status` and the connection-profile renderer.

use ghostrdp_utils::logging::prelude::*;
use tokio::sync::oneshot;

pub mod probe;
pub mod rdp_profile;

/// Waits for the shutdown signal sent by the `serve` command.
///
/// Resolves as well when the sender is dropped, so the server never outlives
/// the task that owns the signal.
pub async fn shutdown(shutdown_rx: oneshot::Receiver<()>) {
    if shutdown_rx.await.is_err() {
        debug!("Shutdown sender dropped");
    }
    info!("Shutting down HTTP server");
}
