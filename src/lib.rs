//! # QUILL - Best-Effort Research Copilot
//!
//! QUILL searches Semantic Scholar for papers matching a research topic,
//! drives a role-structured LLM conversation (retrieve → summarize →
//! synthesize) over them, and renders a markdown research report.
//!
//! ## Overview
//!
//! QUILL can be used in two ways:
//!
//! 1. **As a CLI tool** - Run the `quill` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use quill::{Config, PaperSearchClient, Provider, ResearchCoordinator};
//! use quill::{report, ConversationOrchestrator, RoleInstructions};
//!
//! #[tokio::main]
//! async fn main() -> quill::Result<()> {
//!     let config = Config::from_env()?;
//!
//!     let client = PaperSearchClient::new(&config.search)?;
//!     let outcome = client.search("graph neural networks").await;
//!
//!     let llm = Provider::from_config(&config.llm).create_client()?;
//!     let coordinator = ResearchCoordinator::new(
//!         llm,
//!         RoleInstructions::default(),
//!         config.conversation.max_rounds,
//!     );
//!     // ... run the conversation and assemble the report
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - The paper lookup is **fail-open**: a failed request degrades to an empty
//!   result set ([`SearchOutcome::Failed`] keeps the reason observable) and
//!   the run continues.
//! - The conversation sits behind the [`ConversationOrchestrator`] boundary
//!   and terminates via an explicit [`Completion`] signal within a bounded
//!   round budget.
//! - Report assembly ([`report::assemble`]) is a pure function: identical
//!   inputs yield byte-identical markdown.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `openai` | OpenAI-backed conversation pipeline (default) |
//!
//! ## Modules
//!
//! - [`agents`] - Conversation orchestration boundary and role instructions
//! - [`cli`] - Command-line interface and terminal output
//! - [`llm`] - LLM provider clients and abstractions
//! - [`report`] - Deterministic report assembly and persistence
//! - [`research`] - Bounded research conversation pipeline
//! - [`search`] - Semantic Scholar paper search client
//! - [`types`] - Core types and error handling
//! - [`utils`] - Configuration utilities

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Conversation orchestration boundary and role instructions.
pub mod agents;
/// Command-line interface and terminal output helpers.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Deterministic report assembly and persistence.
pub mod report;
/// Bounded research conversation pipeline.
pub mod research;
/// Semantic Scholar paper search client.
pub mod search;
/// Core types (papers, outcomes, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use agents::roles::RoleInstructions;
pub use agents::ConversationOrchestrator;
pub use llm::{LLMClient, Provider};
pub use research::ResearchCoordinator;
pub use search::PaperSearchClient;
pub use types::{
    AppError, Completion, ConversationOutcome, PaperRecord, PaperResultSet, Result, SearchOutcome,
};
pub use utils::config::Config;
