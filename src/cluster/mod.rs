//! Local cluster bootstrapping
//!
//! Derives a bootstrap topology from one base configuration and starts
//! N supervised nodes on the local host, sequentially in index order.
//! Node i's derived bootstrap address only has to be known before node
//! i+1 starts, not reachable, so no concurrent startup is needed.

use futures::future::join_all;
use tracing::{info, warn};

use crate::config::{ConfigError, NodeOptions};
use crate::node::ledger::{LedgerNode, LedgerNodeFactory};
use crate::node::supervisor::NodeSupervisor;

/// The per-node configuration records of a locally-simulated network.
#[derive(Debug, Clone)]
pub struct ClusterTopology {
    bootstrap_addr: String,
    nodes: Vec<NodeOptions>,
}

impl ClusterTopology {
    /// Derive `count` configuration records from a base configuration.
    ///
    /// Entry `i` listens on the base host with port `base_port + i` and
    /// stores under the base folder suffixed with decimal `i` (index 0
    /// keeps both unmodified). When the base has no bootstrap address,
    /// node 0 is the topology root and every other entry bootstraps off
    /// its listen address; otherwise all entries, node 0 included, use
    /// the externally supplied address.
    pub fn derive(base: &NodeOptions, count: usize) -> Result<Self, ConfigError> {
        let (host, port) = base.split_listen_addr()?;

        let bootstrap_addr = base
            .bootstrap_addr
            .clone()
            .unwrap_or_else(|| base.listen_addr.clone());

        let mut nodes = Vec::with_capacity(count);
        for i in 0..count {
            if i == 0 && base.is_bootstrap_root() {
                nodes.push(base.clone());
                continue;
            }

            let derived_port = port as u32 + i as u32;
            if derived_port > u16::MAX as u32 {
                return Err(ConfigError::InvalidListenAddr(format!(
                    "{}:{}",
                    host, derived_port
                )));
            }

            let mut options = base.clone();
            options.listen_addr = format!("{}:{}", host, derived_port);
            if i > 0 {
                options.folder = format!("{}{}", base.folder, i);
            }
            options.bootstrap_addr = Some(bootstrap_addr.clone());
            nodes.push(options);
        }

        Ok(Self {
            bootstrap_addr,
            nodes,
        })
    }

    /// The working bootstrap address shared by the joining nodes.
    pub fn bootstrap_addr(&self) -> &str {
        &self.bootstrap_addr
    }

    pub fn nodes(&self) -> &[NodeOptions] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeOptions> {
        self.nodes
    }
}

/// A locally-simulated network of supervised nodes.
pub struct Cluster<N: LedgerNode> {
    supervisors: Vec<NodeSupervisor<N>>,
}

impl<N: LedgerNode> Cluster<N> {
    pub fn len(&self) -> usize {
        self.supervisors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supervisors.is_empty()
    }

    pub fn supervisors(&self) -> &[NodeSupervisor<N>] {
        &self.supervisors
    }

    /// Block until every node in the cluster has finished.
    ///
    /// The orchestrator process is the long-lived host for the simulated
    /// network; joining all completion signals keeps it alive without
    /// spinning.
    pub async fn wait(&self) {
        join_all(self.supervisors.iter().map(|s| s.wait())).await;
    }

    /// Stop every node, in start order. Each stop is latch-guarded.
    pub async fn shutdown(&self) {
        for supervisor in &self.supervisors {
            supervisor.shutdown().await;
        }
    }
}

/// Derive the topology for `count` nodes and start one supervisor per
/// entry, sequentially in index order.
///
/// A startup failure on one node is logged and does not abort the
/// remaining spawns; the failed node is excluded from the returned
/// cluster. With `count == 0` the returned cluster is empty.
pub async fn bootstrap_cluster<F>(
    base: &NodeOptions,
    count: usize,
    factory: &F,
) -> Result<Cluster<F::Node>, ConfigError>
where
    F: LedgerNodeFactory,
{
    let topology = ClusterTopology::derive(base, count)?;
    info!(
        "Bootstrapping local cluster: {} nodes off {}",
        count,
        topology.bootstrap_addr()
    );

    let mut supervisors = Vec::with_capacity(count);
    for (i, options) in topology.into_nodes().into_iter().enumerate() {
        let listen_addr = options.listen_addr.clone();
        let supervisor = NodeSupervisor::new(factory.create(options));
        match supervisor.start().await {
            Ok(()) => {
                info!("Cluster node {} listening on {}", i, listen_addr);
                supervisors.push(supervisor);
            }
            Err(e) => {
                warn!("Cluster node {} failed to start, continuing: {}", i, e);
            }
        }
    }

    Ok(Cluster { supervisors })
}
