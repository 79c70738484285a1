//! Discovery Data Types
//!
//! Wire structures exchanged with the discovery service.

use serde::{Deserialize, Serialize};

/// A storage node reachable by IP and port, identified by `node_id`.
///
/// Immutable once received from the directory; identity is the `node_id`,
/// while `ip`/`port` describe the reachable storage endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Peer {
    pub node_id: String,
    pub ip: String,
    pub port: u16,
}

impl Peer {
    /// Base URL of this peer's storage endpoint.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}

/// Envelope returned by `GET {directory}/peers`.
///
/// A directory that knows no peers may answer with an empty array or omit
/// the field entirely; both decode to an empty listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct PeersResponse {
    #[serde(default)]
    pub peers: Vec<Peer>,
}
