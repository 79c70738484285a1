use crate::discovery::types::Peer;
use crate::transfer::protocol::ENDPOINT_STORE;
use std::time::{Duration, Instant};

/// Latency sentinel for peers that produced no usable measurement.
pub const UNREACHABLE: Duration = Duration::MAX;

/// Round-trip measurement for one candidate peer.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub peer: Peer,
    pub latency: Duration,
}

impl ProbeResult {
    pub fn is_reachable(&self) -> bool {
        self.latency < UNREACHABLE
    }
}

/// Measures round-trip time to peer storage endpoints.
#[derive(Clone)]
pub struct LatencyProber {
    http_client: reqwest::Client,
}

impl LatencyProber {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    /// Measures round-trip time to the peer's store endpoint.
    ///
    /// Any HTTP response counts as a reachability signal, 405 Method Not
    /// Allowed included: peer servers are not required to implement HEAD,
    /// and an answered request proves the port is served by a live peer.
    /// Transport-level failures (connection refused, timeout, DNS) degrade
    /// to [`UNREACHABLE`]; this never returns an error.
    pub async fn measure(&self, peer: &Peer, timeout: Duration) -> Duration {
        let url = format!("{}{}", peer.base_url(), ENDPOINT_STORE);
        let start = Instant::now();

        match self.http_client.head(&url).timeout(timeout).send().await {
            Ok(response) => {
                let elapsed = start.elapsed();
                tracing::debug!(
                    "Probe {} answered {} in {:?}",
                    peer.node_id,
                    response.status(),
                    elapsed
                );
                elapsed
            }
            Err(e) => {
                tracing::debug!("Probe {} failed: {}", peer.node_id, e);
                UNREACHABLE
            }
        }
    }
}
