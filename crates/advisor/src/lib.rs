//! Advice requester.
//!
//! Turns the ledger's active entries into a bounded financial snapshot and
//! asks an external text-generation service for a short prose summary.
//! Failures never escape this crate: every error class collapses into a
//! fixed user-facing reply, so callers keep a uniform string contract.

pub use requester::AdviceRequester;
pub use settings::{AdvisorSettings, Settings};
pub use snapshot::{SAMPLE_LIMIT, SampledEntry, Snapshot};

mod requester;
mod settings;
mod snapshot;
