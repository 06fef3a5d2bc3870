//! CLI module for QUILL.
//!
//! Provides command-line parsing for the `quill` binary. Uses clap for
//! argument parsing and owo-colors (via [`output::Output`]) for colored
//! terminal output.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// QUILL - best-effort research copilot.
///
/// Searches Semantic Scholar for papers on a topic, drives a role-structured
/// LLM conversation over them, and writes a markdown research report.
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "QUILL - best-effort research copilot",
    long_about = "Searches Semantic Scholar for papers matching a research topic, drives a\n\
                  role-structured LLM conversation (retrieve -> summarize -> synthesize)\n\
                  over them, and writes a markdown research report.\n\n\
                  Requires OPENAI_API_KEY in the environment (or a .env file). A\n\
                  SEMANTIC_SCHOLAR_API_KEY is optional; lookups proceed unauthenticated\n\
                  without one.",
    after_help = "EXAMPLES:\n    \
                  quill \"graph neural networks\"\n    \
                  quill \"test-time compute\" --limit 3\n    \
                  quill \"agentic retrieval\" --output reports/agentic.md\n    \
                  quill --model gpt-4o-mini"
)]
pub struct Cli {
    /// Research topic to investigate
    #[arg(default_value = "What are the latest methods in Retrieval-Augmented Generation (RAG)?")]
    pub query: String,

    /// Maximum number of papers to retrieve
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output path for the markdown report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Model to use (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
