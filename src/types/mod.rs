//! Core types for QUILL: the paper data model, tagged search/conversation
//! outcomes, and the crate-wide error taxonomy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============= Paper Types =============

/// One retrieved publication, normalized from the Semantic Scholar payload.
///
/// A record is immutable once constructed: downstream stages only read it.
/// Fields absent from the upstream payload stay `None`/empty; nothing is
/// fabricated on their behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title. Empty when the upstream record carried none.
    pub title: String,
    /// Abstract text, when the upstream source exposes one.
    pub abstract_text: Option<String>,
    /// Publication year.
    pub year: Option<i32>,
    /// Author names in upstream order. Order is not semantically significant.
    pub authors: Vec<String>,
    /// Link to the source record.
    pub url: Option<String>,
}

/// Ordered, size-capped collection of [`PaperRecord`]s for one query.
///
/// Order is the upstream relevance ranking; no deduplication is performed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperResultSet {
    records: Vec<PaperRecord>,
}

impl PaperResultSet {
    /// Build a result set from upstream records, truncated to `limit` while
    /// preserving upstream order.
    pub fn from_records(mut records: Vec<PaperRecord>, limit: usize) -> Self {
        records.truncate(limit);
        Self { records }
    }

    /// The records, in upstream order.
    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============= Search Outcome =============

/// Result of one paper lookup.
///
/// "Zero matching papers" and "the lookup itself failed" are distinct states:
/// both degrade to an empty paper slice downstream (the tool is best-effort),
/// but callers, logs, and tests can tell them apart.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The endpoint answered; the set may be empty.
    Results(PaperResultSet),
    /// The lookup failed (network error, non-2xx status, undecodable body).
    Failed {
        /// Human-readable cause, surfaced in logs and warnings.
        reason: String,
    },
}

impl SearchOutcome {
    /// The retrieved papers; empty when the lookup failed.
    pub fn papers(&self) -> &[PaperRecord] {
        match self {
            SearchOutcome::Results(set) => set.records(),
            SearchOutcome::Failed { .. } => &[],
        }
    }

    /// The failure reason, if the lookup failed.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SearchOutcome::Results(_) => None,
            SearchOutcome::Failed { reason } => Some(reason),
        }
    }

    /// Whether the lookup failed (as opposed to returning zero matches).
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed { .. })
    }
}

// ============= Conversation Outcome =============

/// Explicit termination signal for a conversation run.
///
/// Replaces free-text sentinel matching: liveness is decoupled from message
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completion {
    /// Every planned turn ran, including synthesis.
    Done,
    /// The round budget ran out before the synthesis turn.
    ExhaustedRounds,
    /// A turn failed mid-run; partial findings may still be present.
    Failed(String),
}

/// Structured result of a conversation run: per-paper findings plus a
/// separate synthesis, so report assembly never parses free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationOutcome {
    /// Finding text keyed by paper title. A paper with no finding is absent
    /// or maps to an empty string.
    pub findings: BTreeMap<String, String>,
    /// Cross-paper synthesis text. May be empty.
    pub synthesis: String,
    /// How the conversation ended.
    pub completion: Completion,
}

impl ConversationOutcome {
    /// Whether the conversation ran to completion.
    pub fn is_done(&self) -> bool {
        self.completion == Completion::Done
    }

    /// Finding text for a paper title, if any was produced.
    pub fn finding_for(&self, title: &str) -> Option<&str> {
        self.findings.get(title).map(String::as_str)
    }
}

// ============= Error Types =============

/// Crate-wide error taxonomy.
///
/// `Search` errors are recovered locally into [`SearchOutcome::Failed`] and
/// never abort a run; `Config` and `Persistence` are fatal; `Orchestration`
/// aborts after the partial report is written.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid startup configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A model-provider call failed.
    #[error("LLM error: {0}")]
    LLM(String),

    /// The bibliographic lookup failed.
    #[error("Search error: {0}")]
    Search(String),

    /// The conversation pipeline failed or never terminated.
    #[error("Orchestration error: {0}")]
    Orchestration(String),

    /// The report could not be written.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
