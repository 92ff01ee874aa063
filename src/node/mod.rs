//! Node supervision for the orchestrator
//!
//! This module provides the ledger-node collaborator contract, the
//! single-node supervisor, and on-demand state snapshots.

pub mod ledger;
pub mod snapshot;
pub mod supervisor;

pub use ledger::{
    LedgerNode, LedgerNodeFactory, NodeError, NodeStats, TransactionRecord, WalletInfo,
};
pub use snapshot::{MinerInfo, NodeSnapshot, WalletView};
pub use supervisor::NodeSupervisor;
