//! Bounded research conversation pipeline.
//!
//! This module provides the built-in implementation of the
//! [`crate::agents::ConversationOrchestrator`] boundary: a fixed-order
//! coordinator that spends one LLM turn framing the retrieved papers, one
//! turn summarizing each paper, and one turn synthesizing across them.
//!
//! # Research Workflow
//!
//! 1. **Framing** - the retriever role relates the fetched set to the query
//! 2. **Summaries** - the summarizer role extracts insights per paper
//! 3. **Synthesis** - the synthesizer role compares findings across papers
//!
//! Every turn draws from a single round budget; the coordinator never loops,
//! so termination is structural rather than detected from message content.

/// Fixed-order, round-bounded conversation coordinator.
pub mod coordinator;

pub use coordinator::ResearchCoordinator;
