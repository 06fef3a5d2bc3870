//! LLM provider clients and abstractions.
//!
//! The conversation pipeline only ever talks to [`LLMClient`], so providers
//! can be swapped (or mocked in tests) without touching application code.
//!
//! # Supported Providers
//!
//! Enable providers via Cargo features:
//! - `openai` - OpenAI API and compatible endpoints (default)

/// Core LLM client trait and provider selection.
pub mod client;
/// OpenAI API client.
#[cfg(feature = "openai")]
pub mod openai;

pub use client::{LLMClient, Provider};
