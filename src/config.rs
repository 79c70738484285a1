//! Client Configuration
//!
//! Every tunable of the placement and transfer pipeline lives here as one
//! explicit struct. Callers construct it once and pass it down; tests inject
//! shortened timeouts to keep runs deterministic and fast.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for directory lookup, latency probing, and chunk transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Number of peers a chunk should be copied to.
    pub replication_factor: usize,
    /// Maximum number of candidate peers requested from the directory.
    pub candidate_limit: usize,
    /// Timeout for the directory listing request.
    pub directory_timeout: Duration,
    /// Timeout for a single reachability probe.
    pub probe_timeout: Duration,
    /// Maximum number of simultaneous probes.
    pub probe_concurrency: usize,
    /// Overall deadline for collecting probe results. Probes still in
    /// flight when it expires count as unreachable.
    pub probe_deadline: Duration,
    /// Timeout for a single chunk upload or download.
    pub transfer_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            replication_factor: 3,
            candidate_limit: 40,
            directory_timeout: Duration::from_secs(4),
            probe_timeout: Duration::from_millis(1500),
            probe_concurrency: 16,
            probe_deadline: Duration::from_secs(6),
            transfer_timeout: Duration::from_secs(10),
        }
    }
}
