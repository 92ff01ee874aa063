//! Front-end request bridge
//!
//! Dispatches named requests from a front end to the supervised node and
//! returns a response payload. Requests are a closed set; an unknown
//! name or an undecodable payload is an explicit error, not a silent
//! no-op. The bridge holds no session state between calls and performs
//! no locking of its own.

pub mod errors;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::node::ledger::LedgerNode;
use crate::node::snapshot::NodeSnapshot;

pub use errors::{BridgeError, BridgeResult};

/// A front-end request, decoded into its strongly-typed form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeRequest {
    /// Read-only: assemble a fresh state snapshot
    GetInfos,
    /// Submit a transaction; the instruction string is passed through to
    /// the node unmodified
    Send { instruction: String },
}

impl BridgeRequest {
    /// Decode a named wire request.
    ///
    /// `send` expects a JSON string payload. Unknown names yield
    /// [`BridgeError::UnsupportedRequest`], undecodable payloads
    /// [`BridgeError::MalformedRequest`].
    pub fn from_wire(name: &str, payload: Option<&Value>) -> BridgeResult<Self> {
        match name {
            "getInfos" => Ok(Self::GetInfos),
            "send" => {
                let payload =
                    payload.ok_or_else(|| BridgeError::malformed(name, "missing payload"))?;
                let instruction = payload
                    .as_str()
                    .ok_or_else(|| BridgeError::malformed(name, "expected a string payload"))?;
                Ok(Self::Send {
                    instruction: instruction.to_string(),
                })
            }
            other => Err(BridgeError::UnsupportedRequest(other.to_string())),
        }
    }
}

/// Response payload returned to the front end.
///
/// Serializes untagged: the front end sees either a snapshot object or a
/// bare outcome string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BridgeResponse {
    Infos(Box<NodeSnapshot>),
    /// Empty on success, the node's error message on a rejected send
    SendOutcome(String),
}

/// Connects a front end to the supervised node's live state.
///
/// Constructed once at startup around the node handle; requests are
/// handled synchronously per call and may run concurrently with the
/// node's own background activity.
pub struct Bridge<N: LedgerNode> {
    node: Arc<N>,
}

impl<N: LedgerNode> Bridge<N> {
    pub fn new(node: Arc<N>) -> Self {
        Self { node }
    }

    /// Dispatch a decoded request.
    ///
    /// `Send` can mutate ledger state; a rejection is surfaced as the
    /// outcome string, never as an error of the bridge itself.
    pub async fn handle(&self, request: BridgeRequest) -> BridgeResponse {
        match request {
            BridgeRequest::GetInfos => {
                BridgeResponse::Infos(Box::new(NodeSnapshot::capture(&*self.node)))
            }
            BridgeRequest::Send { instruction } => {
                debug!("Submitting transaction: {}", instruction);
                match self.node.send_to(&instruction).await {
                    Ok(()) => BridgeResponse::SendOutcome(String::new()),
                    Err(e) => BridgeResponse::SendOutcome(e.to_string()),
                }
            }
        }
    }

    /// Wire-level entry: decode, dispatch, serialize.
    pub async fn handle_wire(&self, name: &str, payload: Option<&Value>) -> BridgeResult<Value> {
        let request = BridgeRequest::from_wire(name, payload)?;
        let response = self.handle(request).await;
        Ok(serde_json::to_value(response)?)
    }
}
