use super::types::{Peer, PeersResponse};
use crate::config::ClientConfig;
use crate::error::StorageClientError;
use std::time::Duration;

/// Client for the discovery service's peer directory.
pub struct DirectoryClient {
    http_client: reqwest::Client,
    directory_timeout: Duration,
}

impl DirectoryClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            directory_timeout: config.directory_timeout,
        }
    }

    /// Fetches up to `limit` candidate peers from the directory.
    ///
    /// Issues one bounded-timeout query. Transport errors and non-success
    /// responses are fatal to the call; a directory that reports no peers
    /// yields an empty listing, which is not an error.
    pub async fn list_peers(
        &self,
        directory_url: &str,
        limit: usize,
    ) -> Result<Vec<Peer>, StorageClientError> {
        let url = format!("{}/peers", directory_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("limit", limit)])
            .timeout(self.directory_timeout)
            .send()
            .await
            .map_err(|e| StorageClientError::DirectoryUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageClientError::DirectoryUnavailable(format!(
                "directory returned {}",
                response.status()
            )));
        }

        let listing: PeersResponse = response
            .json()
            .await
            .map_err(|e| StorageClientError::DirectoryUnavailable(e.to_string()))?;

        tracing::debug!("Directory returned {} candidate peer(s)", listing.peers.len());

        Ok(listing.peers)
    }
}
