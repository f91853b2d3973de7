//! Graceful shutdown.
//!
//! `Shutdown` is held by whoever decides when to stop (the signal task in
//! `main`, or a test). Each long-running task holds a `ShutdownListener`
//! and stops accepting work once it resolves.

use tokio::sync::broadcast;

pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Hand out a listener. Listeners created after `trigger` never fire.
    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Stop every listener. A no-op when nobody is listening.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// One task's view of the shutdown signal.
pub struct ShutdownListener {
    rx: broadcast::Receiver<()>,
}

impl ShutdownListener {
    /// Resolve when shutdown is triggered or the `Shutdown` is dropped.
    pub async fn wait(mut self) {
        // Closed and Lagged both mean there is nothing left to wait for.
        let _ = self.rx.recv().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_reaches_every_listener() {
        let shutdown = Shutdown::new();
        let a = shutdown.listener();
        let b = shutdown.listener();

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), async {
            a.wait().await;
            b.wait().await;
        })
        .await
        .expect("listeners did not observe the trigger");
    }

    #[tokio::test]
    async fn test_dropping_coordinator_releases_listeners() {
        let shutdown = Shutdown::new();
        let listener = shutdown.listener();
        drop(shutdown);

        tokio::time::timeout(Duration::from_secs(1), listener.wait())
            .await
            .expect("listener kept waiting after the coordinator was dropped");
    }
}
