//! Peer Storage Wire Protocol
//!
//! Endpoints and field names spoken by every peer storage node. These shapes
//! are fixed for compatibility with deployed peers; changing them is a
//! cluster-wide migration.

// --- Endpoints ---

/// Accepts chunk uploads (multipart POST). Also the target of reachability
/// probes, which is why any response from it counts as a liveness signal.
pub const ENDPOINT_STORE: &str = "/store";
/// Serves chunk bytes by content hash: `GET /retrieve/{hash}`.
pub const ENDPOINT_RETRIEVE: &str = "/retrieve";

// --- Multipart fields ---

/// Part carrying the chunk payload; its filename is the content hash.
pub const FIELD_FILE: &str = "file";
/// Text field repeating the declared content hash.
pub const FIELD_FILE_HASH: &str = "file_hash";

/// Acknowledgement synthesized when a peer answers success without a
/// parseable JSON body. Absence of a structured ack is not an error.
pub fn generic_ack() -> serde_json::Value {
    serde_json::json!({ "status": "ok" })
}
