use super::prober::{LatencyProber, ProbeResult, UNREACHABLE};
use crate::config::ClientConfig;
use crate::discovery::types::Peer;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};

/// Ranks candidate peers by proximity and picks a replica set.
pub struct ReplicaSelector {
    prober: LatencyProber,
}

impl ReplicaSelector {
    pub fn new(prober: LatencyProber) -> Self {
        Self { prober }
    }

    /// Picks the nearest `replication` peers out of the candidate pool.
    ///
    /// Candidates are de-duplicated by `node_id` (first occurrence wins) and
    /// probed concurrently, bounded by `config.probe_concurrency` permits.
    /// Collection stops at `config.probe_deadline`; peers whose probe has
    /// not completed by then keep the unreachable sentinel and any late
    /// result is discarded.
    ///
    /// Peers with finite latency are preferred, in ascending latency order
    /// (ties keep candidate order). When fewer than `replication` are
    /// reachable the remainder is filled from the sorted tail, best effort;
    /// the selection is shorter than `replication` only when the pool
    /// itself is.
    pub async fn pick_nearest(
        &self,
        peers: Vec<Peer>,
        replication: usize,
        config: &ClientConfig,
    ) -> Vec<Peer> {
        let candidates = dedup_by_node_id(peers);
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut ranked = self.probe_all(&candidates, config).await;
        // Vec::sort_by_key is stable, so equal latencies keep candidate order.
        ranked.sort_by_key(|probe| probe.latency);

        let reachable = ranked.iter().filter(|p| p.is_reachable()).count();

        if reachable < replication && reachable < candidates.len() {
            tracing::warn!(
                "Only {} of {} candidate peer(s) reachable, selecting best effort",
                reachable,
                candidates.len()
            );
            return ranked
                .into_iter()
                .take(replication)
                .map(|p| p.peer)
                .collect();
        }

        ranked
            .into_iter()
            .filter(|p| p.is_reachable())
            .take(replication)
            .map(|p| p.peer)
            .collect()
    }

    /// Probes every candidate and returns results in candidate order.
    async fn probe_all(&self, candidates: &[Peer], config: &ClientConfig) -> Vec<ProbeResult> {
        // At least one permit, or the probes could never start.
        let permit_count = config.probe_concurrency.min(candidates.len()).max(1);
        let permits = Arc::new(Semaphore::new(permit_count));
        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, Duration)>();

        for (index, peer) in candidates.iter().cloned().enumerate() {
            let permits = permits.clone();
            let tx = tx.clone();
            let prober = self.prober.clone();
            let probe_timeout = config.probe_timeout;

            tokio::spawn(async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return,
                };
                let latency = prober.measure(&peer, probe_timeout).await;
                // Exactly one send per probe task, each into its own slot;
                // after the deadline the receiver is gone and the straggler
                // result is simply dropped.
                let _ = tx.send((index, latency));
            });
        }
        drop(tx);

        let mut latencies = vec![UNREACHABLE; candidates.len()];
        let deadline = tokio::time::Instant::now() + config.probe_deadline;

        loop {
            match tokio::time::timeout_at(deadline, rx.recv()).await {
                Ok(Some((index, latency))) => latencies[index] = latency,
                // Channel closed: every probe has reported.
                Ok(None) => break,
                Err(_) => {
                    tracing::debug!("Probe collection deadline expired, keeping partial results");
                    break;
                }
            }
        }

        candidates
            .iter()
            .cloned()
            .zip(latencies)
            .map(|(peer, latency)| ProbeResult { peer, latency })
            .collect()
    }
}

fn dedup_by_node_id(peers: Vec<Peer>) -> Vec<Peer> {
    let mut seen = HashSet::new();
    peers
        .into_iter()
        .filter(|peer| seen.insert(peer.node_id.clone()))
        .collect()
}
