//! Shutdown coordination for the gateway.
//!
//! The server finishes in-flight requests and stops accepting new ones
//! when either Ctrl+C arrives or [`Shutdown::trigger`] is called (the
//! latter is how tests stop a spawned server).

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve when the process should stop: Ctrl+C or a broadcast trigger,
/// whichever comes first.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    tokio::select! {
        _ = ctrl_c() => {}
        _ = rx.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}

/// Wait for Ctrl+C; if the handler cannot be installed, the broadcast
/// channel stays the only shutdown trigger.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
