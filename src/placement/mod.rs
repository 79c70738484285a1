//! Replica Placement Module
//!
//! Decides which peers receive a chunk. Candidates are probed for network
//! proximity and ranked by measured round-trip time.
//!
//! ## Core Mechanisms
//! - **Probing**: lightweight reachability requests, concurrent but bounded,
//!   with a per-probe timeout and an overall collection deadline so a hung
//!   peer can never stall the batch.
//! - **Ranking**: stable sort ascending by latency; unreachable peers carry
//!   an infinite sentinel and sort last.
//! - **Degradation**: when fewer peers are reachable than the replication
//!   factor asks for, selection falls back to the best-effort prefix of the
//!   full ranking rather than failing.

pub mod prober;
pub mod selector;
