//! OS signal handling.
//!
//! Translates SIGINT and SIGTERM into a trigger on the [`Shutdown`]
//! coordinator. Repeated signals are ignored; the drain is already bounded
//! by the server's grace period.

use crate::lifecycle::Shutdown;

/// Spawn the watcher task that triggers shutdown on SIGINT or SIGTERM.
pub fn spawn_watcher(shutdown: &Shutdown) {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::info!("received SIGINT"),
        _ = terminate.recv() => tracing::info!("received SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("received interrupt");
}
