use super::types::{AssignmentResult, AssignmentStatus};
use crate::config::ClientConfig;
use crate::discovery::client::DirectoryClient;
use crate::discovery::types::Peer;
use crate::error::StorageClientError;
use crate::placement::prober::LatencyProber;
use crate::placement::selector::ReplicaSelector;
use crate::transfer::client::TransferClient;

/// Drives chunk distribution: directory lookup, replica selection, and
/// per-peer transfer.
pub struct ReplicationCoordinator {
    directory_url: String,
    config: ClientConfig,
    directory: DirectoryClient,
    selector: ReplicaSelector,
    transfer: TransferClient,
}

impl ReplicationCoordinator {
    pub fn new(directory_url: impl Into<String>, config: ClientConfig) -> Self {
        let directory = DirectoryClient::new(&config);
        let selector = ReplicaSelector::new(LatencyProber::new());
        let transfer = TransferClient::new();

        Self {
            directory_url: directory_url.into(),
            config,
            directory,
            selector,
            transfer,
        }
    }

    /// Pushes one chunk to the nearest `replication` peers.
    ///
    /// Fatal only when the directory cannot be queried. Upload failures are
    /// captured into the per-peer record, and one failing peer never
    /// prevents the attempts on the remaining ones. The result order equals
    /// the selection order; when the candidate pool is smaller than
    /// `replication` the result list is correspondingly shorter, which is
    /// not an error.
    pub async fn distribute(
        &self,
        content: &[u8],
        content_hash: &str,
        replication: usize,
    ) -> Result<Vec<AssignmentResult>, StorageClientError> {
        let peers = self
            .directory
            .list_peers(&self.directory_url, self.config.candidate_limit)
            .await?;

        let chosen = self
            .selector
            .pick_nearest(peers, replication, &self.config)
            .await;

        tracing::info!(
            "Distributing chunk {} to {} peer(s)",
            content_hash,
            chosen.len()
        );

        let mut results = Vec::with_capacity(chosen.len());
        for peer in &chosen {
            let record = match self
                .transfer
                .upload(peer, content, content_hash, self.config.transfer_timeout)
                .await
            {
                Ok(_) => AssignmentResult {
                    node_id: peer.node_id.clone(),
                    ip: peer.ip.clone(),
                    port: peer.port,
                    status: AssignmentStatus::Ok,
                    error: None,
                },
                Err(e) => {
                    tracing::warn!(
                        "Upload of {} to peer {} failed: {}",
                        content_hash,
                        peer.node_id,
                        e
                    );
                    AssignmentResult {
                        node_id: peer.node_id.clone(),
                        ip: peer.ip.clone(),
                        port: peer.port,
                        status: AssignmentStatus::Fail,
                        error: Some(e.to_string()),
                    }
                }
            };
            results.push(record);
        }

        Ok(results)
    }

    /// Fetches chunk bytes for `content_hash` from exactly one peer.
    ///
    /// There is no fallback target, so transfer errors propagate to the
    /// caller directly.
    pub async fn fetch(
        &self,
        peer: &Peer,
        content_hash: &str,
    ) -> Result<Vec<u8>, StorageClientError> {
        self.transfer
            .download(peer, content_hash, self.config.transfer_timeout)
            .await
    }
}
