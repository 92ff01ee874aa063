//! Point-in-time node state snapshots for the front end
//!
//! A snapshot is assembled fresh on every request and never mutated
//! afterwards; the aggregator keeps no state of its own between calls.

use serde::{Deserialize, Serialize};

use crate::node::ledger::{LedgerNode, TransactionRecord};

/// Miner status at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinerInfo {
    /// Most recent hash-rate sample, 0 when none have been taken
    pub hashrate: u64,
    pub running: bool,
    pub waiting_transactions: usize,
    pub processing_transactions: usize,
}

/// Display-only projection of a wallet: no key material, sanitized address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub name: String,
    pub address: String,
    pub amount: i64,
}

/// Immutable aggregate of a running node's live state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub miner_info: MinerInfo,
    pub wallets: Vec<WalletView>,
    pub nodes_nb: usize,
    pub synced: bool,
    pub blocks_height: i64,
    pub difficulty: i64,
    pub next_difficulty: i64,
    pub time_since_last_block: i64,
    pub stored_keys: usize,
    pub history: Vec<TransactionRecord>,
    pub own_waiting_tx: Vec<TransactionRecord>,
}

impl NodeSnapshot {
    /// Assemble a snapshot from the node's live state.
    ///
    /// Every invocation re-reads all underlying state. The reported hash
    /// rate is the last sample of the node's hash-rate sequence, with no
    /// averaging or smoothing.
    pub fn capture<N: LedgerNode>(node: &N) -> Self {
        let wallets = node
            .wallets()
            .into_iter()
            .map(|wallet| WalletView {
                amount: node.available_funds(&wallet.public_key),
                address: node.sanitized_address(&wallet.public_key),
                name: wallet.name,
            })
            .collect();

        let stats = node.stats();
        let hashrate = stats.hash_rate_samples.last().copied().unwrap_or(0);

        Self {
            wallets,
            nodes_nb: node.connected_node_count(),
            synced: node.is_synced(),
            blocks_height: node.chain_height(),
            difficulty: node.difficulty(),
            next_difficulty: node.next_difficulty(),
            time_since_last_block: node.time_since_last_block(),
            stored_keys: node.stored_key_count(),
            history: node.own_history(),
            own_waiting_tx: node.own_pending_transactions(),
            miner_info: MinerInfo {
                hashrate,
                running: node.is_miner_running(),
                waiting_transactions: node.waiting_transaction_count(),
                processing_transactions: node.processing_transaction_count(),
            },
        }
    }
}
