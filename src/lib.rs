//! Chunkstore Client Library
//!
//! Client-side replica placement and transfer core of a content-addressed
//! distributed storage system: given a pool of candidate peers, it measures
//! network proximity, selects a replica set, pushes a chunk to each selected
//! peer independently, and reports per-peer outcomes. Single-peer retrieval
//! is supported for the read path.
//!
//! ## Architecture Modules
//! The crate is composed of four loosely coupled subsystems:
//!
//! - **`discovery`**: Client for the external discovery service. Fetches a
//!   bounded candidate peer listing per call; nothing is cached between calls.
//! - **`placement`**: Latency probing and replica selection. Probes run
//!   concurrently under a permit cap and an overall deadline; unreachable
//!   peers degrade to an infinite-latency sentinel instead of failing.
//! - **`transfer`**: Single-peer chunk upload (multipart, hash as filename)
//!   and download against the peer storage wire protocol.
//! - **`coordinator`**: Composes the above into `distribute` (fan-out with
//!   per-peer failure isolation) and `fetch` (single-target read).
//!
//! Cross-cutting pieces: [`config::ClientConfig`] carries every tunable
//! explicitly, and [`error::StorageClientError`] is the crate's error
//! surface.

pub mod config;
pub mod coordinator;
pub mod discovery;
pub mod error;
pub mod placement;
pub mod transfer;
