//! Ledger-node collaborator contract
//!
//! The DHT networking, consensus, mining, and wallet logic live in an
//! external collaborator; this trait is the surface the orchestrator
//! consumes. Implementations are expected to be safe for concurrent
//! reads and writes from multiple calling contexts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::NodeOptions;

/// Errors surfaced by a ledger node
#[derive(Debug, Clone, Error)]
pub enum NodeError {
    /// Node failed to bind its listen address or initialize storage
    #[error("node startup failed: {0}")]
    Startup(String),

    /// Node stop operation failed
    #[error("node shutdown failed: {0}")]
    Shutdown(String),

    /// Transaction submission rejected by the node
    #[error("{0}")]
    Send(String),
}

/// A wallet as the ledger node exposes it: name plus raw public key.
///
/// The raw key never crosses the bridge; snapshots carry the sanitized
/// address instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletInfo {
    pub name: String,
    pub public_key: String,
}

/// Miner statistics sampled by the ledger node
#[derive(Debug, Clone, Default)]
pub struct NodeStats {
    /// Hash-rate samples, oldest first
    pub hash_rate_samples: Vec<u64>,
}

/// One entry of a node's own transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub amount: i64,
    pub address: String,
    pub timestamp: i64,
}

/// The ledger-node instance the orchestrator supervises.
///
/// Lifecycle operations are async; state reads are synchronous and must
/// not block on network activity. A `bootstrap_addr` of `None` in the
/// construction options designates a topology root.
#[async_trait]
pub trait LedgerNode: Send + Sync + 'static {
    /// Start the node: bind the listen address, open storage, join the
    /// topology described by the construction options.
    async fn start(&self) -> Result<(), NodeError>;

    /// Stop the node. Not guaranteed idempotent; the supervisor ensures
    /// at most one call per instance.
    async fn stop(&self) -> Result<(), NodeError>;

    /// Resolve once the node has finished on its own.
    async fn wait(&self);

    fn wallets(&self) -> Vec<WalletInfo>;
    fn stats(&self) -> NodeStats;
    fn connected_node_count(&self) -> usize;
    fn is_synced(&self) -> bool;
    fn chain_height(&self) -> i64;
    fn difficulty(&self) -> i64;
    fn next_difficulty(&self) -> i64;
    fn stored_key_count(&self) -> usize;
    fn time_since_last_block(&self) -> i64;
    fn own_history(&self) -> Vec<TransactionRecord>;
    fn own_pending_transactions(&self) -> Vec<TransactionRecord>;
    fn is_miner_running(&self) -> bool;
    fn waiting_transaction_count(&self) -> usize;
    fn processing_transaction_count(&self) -> usize;

    /// Submit a transaction. The instruction string is passed through
    /// unmodified; its format is the node's concern.
    async fn send_to(&self, instruction: &str) -> Result<(), NodeError>;

    /// Available funds for the wallet identified by its raw public key
    fn available_funds(&self, public_key: &str) -> i64;

    /// Display-sanitized form of a raw public key
    fn sanitized_address(&self, public_key: &str) -> String;
}

/// Constructs ledger-node instances from resolved configuration.
///
/// The cluster bootstrapper uses this to create one instance per derived
/// configuration record.
pub trait LedgerNodeFactory {
    type Node: LedgerNode;

    fn create(&self, options: NodeOptions) -> Self::Node;
}

impl<N: LedgerNode, F: Fn(NodeOptions) -> N> LedgerNodeFactory for F {
    type Node = N;

    fn create(&self, options: NodeOptions) -> N {
        self(options)
    }
}
