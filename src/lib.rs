//! Crypto-DHT Node - Lifecycle orchestration for a DHT-backed ledger node
//!
//! This crate is the shell around a peer-to-peer ledger node: it resolves
//! launch configuration, supervises node instances, wires a local test
//! cluster into one bootstrap topology, and bridges a front end to the
//! running node's live state. The ledger node itself (DHT networking,
//! consensus, mining, wallets) is an external collaborator consumed
//! through the [`node::LedgerNode`] trait.
//!
//! ## Layers
//!
//! 1. [`config`] - launch option normalization with mode precedence
//! 2. [`node`] - collaborator contract, supervisor, state snapshots
//! 3. [`cluster`] - local N-node bootstrap topology
//! 4. [`bridge`] - front-end request/response dispatch
//!
//! ## Design Principles
//!
//! 1. **No consensus here**: validation, mining, and wallet logic belong
//!    to the collaborator
//! 2. **Single instance per process path**: node handles are established
//!    once at startup and never replaced
//! 3. **One-shot shutdown**: termination signals funnel through a latch,
//!    so the node's stop operation runs at most once

// Memory allocator optimization using mimalloc (faster than default allocator)
#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod bridge;
pub mod cluster;
pub mod config;
pub mod node;
pub mod utils;

// Re-export the orchestration surface
pub use bridge::{Bridge, BridgeError, BridgeRequest, BridgeResponse};
pub use cluster::{bootstrap_cluster, Cluster, ClusterTopology};
pub use config::{ConfigError, LaunchOptions, NodeOptions};
pub use node::{
    LedgerNode, LedgerNodeFactory, MinerInfo, NodeError, NodeSnapshot, NodeStats, NodeSupervisor,
    TransactionRecord, WalletInfo, WalletView,
};
