//! Shared test helpers: a scriptable mock ledger node
//!
//! The mock counts lifecycle invocations and serves canned state, so
//! tests can assert the orchestrator's exact interaction with the
//! collaborator contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use cdht_node::{LedgerNode, NodeError, NodeStats, TransactionRecord, WalletInfo};

#[derive(Default)]
struct MockInner {
    start_calls: AtomicUsize,
    stop_calls: AtomicUsize,
    sent: Mutex<Vec<String>>,
    state: Mutex<MockNodeState>,
    finished: Notify,
}

#[derive(Default)]
struct MockNodeState {
    wallets: Vec<WalletInfo>,
    funds: HashMap<String, i64>,
    hash_rate_samples: Vec<u64>,
    connected: usize,
    synced: bool,
    height: i64,
    difficulty: i64,
    next_difficulty: i64,
    stored_keys: usize,
    time_since_last_block: i64,
    history: Vec<TransactionRecord>,
    pending: Vec<TransactionRecord>,
    miner_running: bool,
    waiting_tx: usize,
    processing_tx: usize,
    fail_start: Option<String>,
    fail_send: Option<String>,
}

/// Cheaply cloneable mock; clones share counters and state.
#[derive(Clone, Default)]
pub struct MockNode {
    inner: Arc<MockInner>,
}

#[allow(dead_code)]
impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wallet(self, name: &str, public_key: &str, funds: i64) -> Self {
        {
            let mut state = self.inner.state.lock().unwrap();
            state.wallets.push(WalletInfo {
                name: name.to_string(),
                public_key: public_key.to_string(),
            });
            state.funds.insert(public_key.to_string(), funds);
        }
        self
    }

    pub fn with_hash_rate_samples(self, samples: Vec<u64>) -> Self {
        self.inner.state.lock().unwrap().hash_rate_samples = samples;
        self
    }

    pub fn with_chain_state(self, height: i64, difficulty: i64, next_difficulty: i64) -> Self {
        {
            let mut state = self.inner.state.lock().unwrap();
            state.height = height;
            state.difficulty = difficulty;
            state.next_difficulty = next_difficulty;
        }
        self
    }

    pub fn with_peers(self, connected: usize, synced: bool) -> Self {
        {
            let mut state = self.inner.state.lock().unwrap();
            state.connected = connected;
            state.synced = synced;
        }
        self
    }

    pub fn with_miner(self, running: bool, waiting: usize, processing: usize) -> Self {
        {
            let mut state = self.inner.state.lock().unwrap();
            state.miner_running = running;
            state.waiting_tx = waiting;
            state.processing_tx = processing;
        }
        self
    }

    pub fn with_history(self, history: Vec<TransactionRecord>) -> Self {
        self.inner.state.lock().unwrap().history = history;
        self
    }

    pub fn with_pending(self, pending: Vec<TransactionRecord>) -> Self {
        self.inner.state.lock().unwrap().pending = pending;
        self
    }

    pub fn failing_start(self, message: &str) -> Self {
        self.inner.state.lock().unwrap().fail_start = Some(message.to_string());
        self
    }

    pub fn failing_send(self, message: &str) -> Self {
        self.inner.state.lock().unwrap().fail_send = Some(message.to_string());
        self
    }

    pub fn start_calls(&self) -> usize {
        self.inner.start_calls.load(Ordering::SeqCst)
    }

    pub fn stop_calls(&self) -> usize {
        self.inner.stop_calls.load(Ordering::SeqCst)
    }

    pub fn sent_instructions(&self) -> Vec<String> {
        self.inner.sent.lock().unwrap().clone()
    }

    /// Make `wait()` resolve, as if the node finished on its own.
    pub fn finish(&self) {
        self.inner.finished.notify_one();
    }
}

#[async_trait]
impl LedgerNode for MockNode {
    async fn start(&self) -> Result<(), NodeError> {
        self.inner.start_calls.fetch_add(1, Ordering::SeqCst);
        let fail = self.inner.state.lock().unwrap().fail_start.clone();
        match fail {
            Some(message) => Err(NodeError::Startup(message)),
            None => Ok(()),
        }
    }

    async fn stop(&self) -> Result<(), NodeError> {
        self.inner.stop_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.finished.notify_one();
        Ok(())
    }

    async fn wait(&self) {
        self.inner.finished.notified().await;
    }

    fn wallets(&self) -> Vec<WalletInfo> {
        self.inner.state.lock().unwrap().wallets.clone()
    }

    fn stats(&self) -> NodeStats {
        NodeStats {
            hash_rate_samples: self.inner.state.lock().unwrap().hash_rate_samples.clone(),
        }
    }

    fn connected_node_count(&self) -> usize {
        self.inner.state.lock().unwrap().connected
    }

    fn is_synced(&self) -> bool {
        self.inner.state.lock().unwrap().synced
    }

    fn chain_height(&self) -> i64 {
        self.inner.state.lock().unwrap().height
    }

    fn difficulty(&self) -> i64 {
        self.inner.state.lock().unwrap().difficulty
    }

    fn next_difficulty(&self) -> i64 {
        self.inner.state.lock().unwrap().next_difficulty
    }

    fn stored_key_count(&self) -> usize {
        self.inner.state.lock().unwrap().stored_keys
    }

    fn time_since_last_block(&self) -> i64 {
        self.inner.state.lock().unwrap().time_since_last_block
    }

    fn own_history(&self) -> Vec<TransactionRecord> {
        self.inner.state.lock().unwrap().history.clone()
    }

    fn own_pending_transactions(&self) -> Vec<TransactionRecord> {
        self.inner.state.lock().unwrap().pending.clone()
    }

    fn is_miner_running(&self) -> bool {
        self.inner.state.lock().unwrap().miner_running
    }

    fn waiting_transaction_count(&self) -> usize {
        self.inner.state.lock().unwrap().waiting_tx
    }

    fn processing_transaction_count(&self) -> usize {
        self.inner.state.lock().unwrap().processing_tx
    }

    async fn send_to(&self, instruction: &str) -> Result<(), NodeError> {
        self.inner.sent.lock().unwrap().push(instruction.to_string());
        let fail = self.inner.state.lock().unwrap().fail_send.clone();
        match fail {
            Some(message) => Err(NodeError::Send(message)),
            None => Ok(()),
        }
    }

    fn available_funds(&self, public_key: &str) -> i64 {
        self.inner
            .state
            .lock()
            .unwrap()
            .funds
            .get(public_key)
            .copied()
            .unwrap_or(0)
    }

    fn sanitized_address(&self, public_key: &str) -> String {
        format!("san:{}", public_key)
    }
}
