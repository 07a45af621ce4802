use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::signal;
use tokio::sync::Notify;

/// What ended the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Interrupt,
    Terminate,
    /// [`ShutdownManager::signal_shutdown`] was called.
    Requested,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
            Self::Requested => "requested",
        })
    }
}

/// Resolves on Ctrl-C, SIGTERM or an explicit [`signal_shutdown`](Self::signal_shutdown).
#[derive(Debug, Default)]
pub struct ShutdownManager {
    requested: AtomicBool,
    notify: Notify,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn wait_for_shutdown(&self) -> std::io::Result<ShutdownReason> {
        if self.is_shutting_down() {
            return Ok(ShutdownReason::Requested);
        }

        #[cfg(unix)]
        let reason = {
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
            tokio::select! {
                _ = signal::ctrl_c() => ShutdownReason::Interrupt,
                _ = sigterm.recv() => ShutdownReason::Terminate,
                _ = self.notify.notified() => ShutdownReason::Requested,
            }
        };

        #[cfg(not(unix))]
        let reason = tokio::select! {
            _ = signal::ctrl_c() => ShutdownReason::Interrupt,
            _ = self.notify.notified() => ShutdownReason::Requested,
        };

        self.requested.store(true, Ordering::SeqCst);
        tracing::info!(%reason, "shutting down gracefully");
        Ok(reason)
    }

    /// Ask a pending or future [`wait_for_shutdown`](Self::wait_for_shutdown)
    /// to return.
    pub fn signal_shutdown(&self) {
        self.requested.store(true, Ordering::SeqCst);
        // A stored permit covers a waiter that has not started yet.
        self.notify.notify_one();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn requested_shutdown_resolves_the_waiter() {
        let manager = std::sync::Arc::new(ShutdownManager::new());
        let waiter = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.wait_for_shutdown().await })
        };
        tokio::task::yield_now().await;
        manager.signal_shutdown();
        let reason = waiter.await.unwrap().unwrap();
        assert_eq!(reason, ShutdownReason::Requested);
        assert!(manager.is_shutting_down());
    }

    #[tokio::test]
    async fn already_requested_returns_immediately() {
        let manager = ShutdownManager::new();
        manager.signal_shutdown();
        assert_eq!(
            manager.wait_for_shutdown().await.unwrap(),
            ShutdownReason::Requested
        );
    }
}
