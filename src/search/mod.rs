//! Paper retrieval against the Semantic Scholar Graph API.
//!
//! The search client is deliberately fail-open: a run is a best-effort
//! research aid, so a failed lookup degrades to an empty result set instead
//! of aborting. The failure stays observable through
//! [`crate::types::SearchOutcome::Failed`].

/// Bounded, fail-open Semantic Scholar search client.
pub mod client;

pub use client::PaperSearchClient;
