//! Conversation orchestration boundary.
//!
//! The report pipeline treats the multi-role conversation as an external
//! collaborator: it hands over a query and the retrieved papers, and gets
//! back a structured [`ConversationOutcome`]. Everything downstream of the
//! boundary (report assembly, persistence, tests) depends only on the
//! [`ConversationOrchestrator`] trait, never on a concrete pipeline.

/// Role instructions for the retrieve/summarize/synthesize participants.
pub mod roles;

use crate::types::{ConversationOutcome, PaperResultSet, Result};
use async_trait::async_trait;

/// Boundary contract for the role-structured conversation.
///
/// Implementations must guarantee forward progress within a bounded number
/// of turns and report how the conversation ended through
/// [`ConversationOutcome::completion`] — an explicit signal, never a magic
/// suffix in message text. Mid-run failures are reported the same way, with
/// whatever partial findings were gathered, so the caller can still render
/// them.
#[async_trait]
pub trait ConversationOrchestrator: Send + Sync {
    /// Run the conversation for `query`, grounded on `papers`.
    ///
    /// # Errors
    ///
    /// Only pre-flight failures (for example, a provider client that cannot
    /// be constructed) surface as `Err`; anything after the first turn is
    /// folded into the outcome's completion signal.
    async fn run(&self, query: &str, papers: &PaperResultSet) -> Result<ConversationOutcome>;
}
