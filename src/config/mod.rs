//! Launch configuration for the orchestrator
//!
//! Handles normalization of raw launch options into the configuration
//! record the supervisor and cluster bootstrapper consume. Conflicting
//! mode flags are resolved silently by documented precedence, never
//! surfaced as errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address '{0}': expected host:port")]
    InvalidListenAddr(String),
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_folder() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.cdht", home)
}

fn default_verbose() -> u8 {
    3
}

/// Raw launch options, prior to mode resolution.
///
/// Mirrors the launch flags one-to-one; `resolve` turns this into the
/// normalized [`NodeOptions`] record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOptions {
    /// Listening address and port
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Address of the node to join; absent means this node is a bootstrap root
    #[serde(default)]
    pub bootstrap_addr: Option<String>,

    /// Storage folder handed to the ledger node
    #[serde(default = "default_folder")]
    pub folder: String,

    /// Send instruction of the form "amount:destAddress"; empty means none
    #[serde(default)]
    pub send: String,

    /// Verbosity level, 0 for critical and 5 for debug
    #[serde(default = "default_verbose")]
    pub verbose: u8,

    /// Stat mode
    #[serde(default)]
    pub stats: bool,

    /// Show wallets and amounts
    #[serde(default)]
    pub wallets: bool,

    /// Deactivate the front end
    #[serde(default)]
    pub no_gui: bool,

    /// Enable mining
    #[serde(default)]
    pub mine: bool,

    /// Spawn a locally-simulated network of this many nodes (0 = single node)
    #[serde(default)]
    pub cluster_nodes: usize,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            bootstrap_addr: None,
            folder: default_folder(),
            send: String::new(),
            verbose: default_verbose(),
            stats: false,
            wallets: false,
            no_gui: false,
            mine: false,
            cluster_nodes: 0,
        }
    }
}

impl LaunchOptions {
    /// Normalize the raw options into a [`NodeOptions`] record.
    ///
    /// Precedence, applied in order:
    /// 1. Cluster mode is exclusive of single-node send/stats/wallet
    ///    display: it clears all three and forces the front end off.
    /// 2. Stat mode or a pending send instruction forces the front end
    ///    off and clears the wallets display.
    /// 3. A pending send instruction clears stat mode.
    ///
    /// Rules 2 and 3 are independent statements, not an else-chain.
    pub fn resolve(mut self) -> Result<NodeOptions, ConfigError> {
        split_host_port(&self.listen_addr)?;

        if self.cluster_nodes > 0 {
            self.send.clear();
            self.stats = false;
            self.wallets = false;
            self.no_gui = true;
        } else {
            if self.stats || !self.send.is_empty() {
                self.no_gui = true;
                self.wallets = false;
            }
            if !self.send.is_empty() {
                self.stats = false;
            }
        }

        Ok(NodeOptions {
            listen_addr: self.listen_addr,
            bootstrap_addr: self.bootstrap_addr.filter(|a| !a.is_empty()),
            folder: self.folder,
            send: self.send,
            verbose: self.verbose,
            stats: self.stats,
            wallets: self.wallets,
            no_gui: self.no_gui,
            mine: self.mine,
            cluster_nodes: self.cluster_nodes,
        })
    }
}

/// Normalized node configuration, produced by [`LaunchOptions::resolve`].
///
/// The listen address is guaranteed to split into host and numeric port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOptions {
    pub listen_addr: String,
    pub bootstrap_addr: Option<String>,
    pub folder: String,
    pub send: String,
    pub verbose: u8,
    pub stats: bool,
    pub wallets: bool,
    pub no_gui: bool,
    pub mine: bool,
    pub cluster_nodes: usize,
}

impl NodeOptions {
    /// Load a configuration record from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options: NodeOptions = serde_json::from_str(&content)?;
        split_host_port(&options.listen_addr)?;
        Ok(options)
    }

    /// Save the configuration record to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Split the listen address into host and port.
    pub fn split_listen_addr(&self) -> Result<(&str, u16), ConfigError> {
        split_host_port(&self.listen_addr)
    }

    /// Whether this node starts as a bootstrap root (no address to join).
    pub fn is_bootstrap_root(&self) -> bool {
        self.bootstrap_addr.is_none()
    }
}

fn split_host_port(addr: &str) -> Result<(&str, u16), ConfigError> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| ConfigError::InvalidListenAddr(addr.to_string()))?;
    if host.is_empty() {
        return Err(ConfigError::InvalidListenAddr(addr.to_string()));
    }
    let port = port
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidListenAddr(addr.to_string()))?;
    Ok((host, port))
}
