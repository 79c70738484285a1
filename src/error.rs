//! Error Taxonomy
//!
//! Two failure kinds cross the crate boundary: the directory being
//! unavailable (fatal to the call that needed it) and a transfer with a
//! single peer failing (captured per peer during distribution, propagated
//! for single-target downloads). Probe failures never appear here; they
//! degrade to the unreachable latency sentinel instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageClientError {
    /// The peer directory could not be queried: transport error or a
    /// non-success response.
    #[error("peer directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// An upload to or download from one peer failed. A missing chunk and
    /// a failing peer both collapse into this kind; the HTTP status stays
    /// in the reason.
    #[error("transfer with peer {node_id} failed: {reason}")]
    Transfer { node_id: String, reason: String },
}
