use super::protocol::{generic_ack, ENDPOINT_RETRIEVE, ENDPOINT_STORE, FIELD_FILE, FIELD_FILE_HASH};
use crate::discovery::types::Peer;
use crate::error::StorageClientError;
use std::time::Duration;

/// Uploads and downloads chunk bytes against a single peer.
pub struct TransferClient {
    http_client: reqwest::Client,
}

impl TransferClient {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    /// Uploads a chunk to one peer's store endpoint.
    ///
    /// The chunk travels as the multipart `file` part with the content hash
    /// as its filename, and the hash repeated in the `file_hash` field. A
    /// success response without a parseable JSON body still acknowledges the
    /// store; a generic ack is synthesized for it.
    pub async fn upload(
        &self,
        peer: &Peer,
        content: &[u8],
        content_hash: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, StorageClientError> {
        let url = format!("{}{}", peer.base_url(), ENDPOINT_STORE);

        let part =
            reqwest::multipart::Part::bytes(content.to_vec()).file_name(content_hash.to_string());
        let form = reqwest::multipart::Form::new()
            .part(FIELD_FILE, part)
            .text(FIELD_FILE_HASH, content_hash.to_string());

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transfer_error(peer, e.to_string()))?;

        if !response.status().is_success() {
            return Err(transfer_error(
                peer,
                format!("store returned {}", response.status()),
            ));
        }

        match response.json::<serde_json::Value>().await {
            Ok(ack) => Ok(ack),
            Err(_) => Ok(generic_ack()),
        }
    }

    /// Downloads the chunk stored under `content_hash` from one peer.
    ///
    /// A missing chunk and a failing peer both surface as the same transfer
    /// error; the HTTP status stays in the reason.
    pub async fn download(
        &self,
        peer: &Peer,
        content_hash: &str,
        timeout: Duration,
    ) -> Result<Vec<u8>, StorageClientError> {
        let url = format!("{}{}/{}", peer.base_url(), ENDPOINT_RETRIEVE, content_hash);

        let response = self
            .http_client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transfer_error(peer, e.to_string()))?;

        if !response.status().is_success() {
            return Err(transfer_error(
                peer,
                format!("retrieve returned {}", response.status()),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transfer_error(peer, e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

fn transfer_error(peer: &Peer, reason: String) -> StorageClientError {
    StorageClientError::Transfer {
        node_id: peer.node_id.clone(),
        reason,
    }
}
