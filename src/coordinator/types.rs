//! Coordinator Data Types
//!
//! Per-peer outcome records produced by a distribution call.

use serde::{Deserialize, Serialize};

/// Whether the upload to one selected peer succeeded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Ok,
    Fail,
}

/// The recorded outcome of pushing a chunk to one selected peer.
///
/// One record exists per peer actually attempted, in selection order. The
/// endpoint fields are echoed so callers can act on the outcome (e.g. track
/// which replicas hold the chunk) without re-resolving the peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub node_id: String,
    pub ip: String,
    pub port: u16,
    pub status: AssignmentStatus,
    /// Failure message, present only when `status` is [`AssignmentStatus::Fail`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
