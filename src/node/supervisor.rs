//! Single-node lifecycle supervision
//!
//! A supervisor owns exactly one ledger-node instance: it starts it,
//! stops it at most once, and keeps the process alive until the node
//! finishes. Termination signals are funneled through a one-shot latch
//! so a second SIGINT can never reach the node's stop operation.

use std::sync::Arc;

use tracing::{error, info};

use crate::node::ledger::{LedgerNode, NodeError};
use crate::utils::signal::{wait_for_termination, ShutdownLatch};

/// Supervises one ledger-node instance.
///
/// The node handle is established once at construction and never
/// replaced; clones of the supervisor share the same instance and the
/// same shutdown latch.
pub struct NodeSupervisor<N: LedgerNode> {
    node: Arc<N>,
    latch: Arc<ShutdownLatch>,
}

impl<N: LedgerNode> Clone for NodeSupervisor<N> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            latch: Arc::clone(&self.latch),
        }
    }
}

impl<N: LedgerNode> NodeSupervisor<N> {
    pub fn new(node: N) -> Self {
        Self {
            node: Arc::new(node),
            latch: Arc::new(ShutdownLatch::new()),
        }
    }

    /// The supervised node instance.
    pub fn node(&self) -> &Arc<N> {
        &self.node
    }

    /// Start the node.
    ///
    /// A failure to bind the listen address or initialize storage is
    /// logged at critical severity and propagated; in single-node mode
    /// the caller is expected to exit non-zero.
    pub async fn start(&self) -> Result<(), NodeError> {
        if let Err(e) = self.node.start().await {
            error!("Node startup failed: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Stop the node, at most once per supervisor.
    ///
    /// Returns `true` if this call performed the stop. Stop errors are
    /// logged and swallowed; the process is shutting down either way.
    pub async fn shutdown(&self) -> bool {
        if !self.latch.trigger() {
            return false;
        }

        info!("Stopping node");
        if let Err(e) = self.node.stop().await {
            error!("Node shutdown failed: {}", e);
        }
        true
    }

    /// Whether a shutdown has already been requested.
    pub fn is_shutting_down(&self) -> bool {
        self.latch.is_triggered()
    }

    /// Block until the node signals it has finished.
    pub async fn wait(&self) {
        self.node.wait().await;
    }

    /// Spawn the per-process termination listener.
    ///
    /// On the first SIGINT/SIGTERM the node is stopped through the latch
    /// and the process exits with status 0.
    pub fn spawn_signal_listener(&self) -> tokio::task::JoinHandle<()> {
        let supervisor = self.clone();
        tokio::spawn(async move {
            wait_for_termination().await;
            supervisor.shutdown().await;
            std::process::exit(0);
        })
    }

    /// Start the node, arm the signal listener, and block until the node
    /// finishes. The no-front-end single-node control path.
    pub async fn run_until_shutdown(&self) -> Result<(), NodeError> {
        self.start().await?;
        self.spawn_signal_listener();
        self.wait().await;
        Ok(())
    }
}
