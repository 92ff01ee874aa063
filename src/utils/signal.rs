//! Termination-signal handling for graceful shutdown
//!
//! One background listener per process waits for SIGINT/SIGTERM; the
//! one-shot latch guarantees the stop path runs at most once no matter
//! how many signals arrive.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::signal;
use tracing::{info, warn};

/// Wait until the process receives a termination request
/// (SIGTERM, SIGINT, or Ctrl+C).
pub async fn wait_for_termination() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let sigterm = signal(SignalKind::terminate());
        let sigint = signal(SignalKind::interrupt());

        match (sigterm, sigint) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                }
            }
            _ => {
                // Handler registration failed, fall back to Ctrl+C only
                warn!("Failed to register Unix signal handlers, falling back to Ctrl+C");
                signal::ctrl_c().await.ok();
                info!("Received Ctrl+C, shutting down gracefully...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C, shutting down gracefully...");
            }
            Err(e) => {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
        }
    }
}

/// One-shot shutdown latch.
///
/// `trigger()` returns `true` for exactly one caller across all threads;
/// the supervisor runs the node's stop operation only on that path.
#[derive(Debug, Default)]
pub struct ShutdownLatch {
    fired: AtomicBool,
}

impl ShutdownLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the latch. Returns `true` only on the first invocation.
    pub fn trigger(&self) -> bool {
        !self.fired.swap(true, Ordering::SeqCst)
    }

    /// Whether the latch has already fired.
    pub fn is_triggered(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}
