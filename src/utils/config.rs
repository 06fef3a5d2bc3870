//! Environment-sourced configuration.
//!
//! All configuration is collected once at startup into an explicit [`Config`]
//! value and passed to the components that need it. Components never perform
//! ambient environment lookups of their own.

use crate::types::{AppError, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_SEARCH_URL: &str = "https://api.semanticscholar.org/graph/v1";
const DEFAULT_SEARCH_LIMIT: usize = 5;
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SEARCH_RETRIES: u32 = 0;
const DEFAULT_MAX_ROUNDS: u32 = 50;
const DEFAULT_REPORT_PATH: &str = "research_report.md";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model-provider configuration.
    pub llm: LLMConfig,
    /// Paper-search configuration.
    pub search: SearchConfig,
    /// Conversation pipeline configuration.
    pub conversation: ConversationConfig,
    /// Report output configuration.
    pub report: ReportConfig,
}

/// Model-provider configuration.
#[derive(Debug, Clone)]
pub struct LLMConfig {
    /// Provider API key. Required: the conversation pipeline cannot run
    /// without it.
    pub api_key: String,
    /// Provider API base URL.
    pub api_base: String,
    /// Model identifier.
    pub model: String,
}

/// Paper-search configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Semantic Scholar Graph API base URL.
    pub base_url: String,
    /// Optional API key; requests proceed unauthenticated without it.
    pub api_key: Option<String>,
    /// Maximum number of records per lookup.
    pub limit: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Additional attempts after a failed lookup. 0 means exactly one
    /// request per call.
    pub retries: u32,
}

/// Conversation pipeline configuration.
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Upper bound on LLM turns per run.
    pub max_rounds: u32,
}

/// Report output configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Destination path; overwritten on each run.
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if
    /// present).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when `OPENAI_API_KEY` is missing or a
    /// numeric variable fails to parse. No network activity happens before
    /// this check.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            AppError::Config(
                "OPENAI_API_KEY is not set; the conversation pipeline cannot run without it"
                    .to_string(),
            )
        })?;

        Ok(Config {
            llm: LLMConfig {
                api_key,
                api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string()),
                model: env::var("QUILL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
            search: SearchConfig {
                base_url: env::var("SEMANTIC_SCHOLAR_API_URL")
                    .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string()),
                api_key: env::var("SEMANTIC_SCHOLAR_API_KEY").ok(),
                limit: parse_var("QUILL_SEARCH_LIMIT")?.unwrap_or(DEFAULT_SEARCH_LIMIT),
                timeout_secs: parse_var("QUILL_SEARCH_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_SEARCH_TIMEOUT_SECS),
                retries: parse_var("QUILL_SEARCH_RETRIES")?.unwrap_or(DEFAULT_SEARCH_RETRIES),
            },
            conversation: ConversationConfig {
                max_rounds: parse_var("QUILL_MAX_ROUNDS")?.unwrap_or(DEFAULT_MAX_ROUNDS),
            },
            report: ReportConfig {
                output_path: env::var("QUILL_REPORT_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_PATH)),
            },
        })
    }
}

/// Parse an optional numeric environment variable, reporting the variable
/// name on failure.
fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {:?}", name, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so every env-touching
    // assertion lives in this one test to keep the suite race-free.
    #[test]
    fn test_from_env_round_trip() {
        env::remove_var("OPENAI_API_KEY");
        let missing = Config::from_env();
        assert!(missing.is_err());
        let message = match missing {
            Err(e) => e.to_string(),
            Ok(_) => panic!("expected a configuration error"),
        };
        assert!(message.contains("OPENAI_API_KEY"));

        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("QUILL_SEARCH_LIMIT", "3");
        env::set_var("QUILL_REPORT_PATH", "out/report.md");
        let config = Config::from_env().expect("config should load");
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.search.limit, 3);
        assert_eq!(config.search.retries, 0);
        assert_eq!(config.search.timeout_secs, DEFAULT_SEARCH_TIMEOUT_SECS);
        assert_eq!(config.conversation.max_rounds, DEFAULT_MAX_ROUNDS);
        assert_eq!(config.report.output_path, PathBuf::from("out/report.md"));

        env::set_var("QUILL_SEARCH_LIMIT", "not-a-number");
        let invalid = Config::from_env();
        assert!(invalid.is_err());

        env::remove_var("QUILL_SEARCH_LIMIT");
        env::remove_var("QUILL_REPORT_PATH");
        env::remove_var("OPENAI_API_KEY");
    }
}
