//! Mock implementations for testing.
//!
//! Provides a scripted LLM client so the conversation coordinator can be
//! exercised without making actual API calls.

use async_trait::async_trait;
use quill::types::{AppError, Result};
use quill::LLMClient;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One scripted turn: either a canned reply or a simulated provider error.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// The turn succeeds with this text.
    Text(String),
    /// The turn fails with this message.
    Error(String),
}

impl ScriptedReply {
    /// Convenience constructor for a successful turn.
    pub fn text(s: &str) -> Self {
        ScriptedReply::Text(s.to_string())
    }

    /// Convenience constructor for a failed turn.
    pub fn error(s: &str) -> Self {
        ScriptedReply::Error(s.to_string())
    }
}

/// Mock LLM client with per-call scripted responses.
///
/// Calls pop replies front-to-back; once the script is exhausted every
/// further call returns the fallback text. The call counter lets tests
/// assert round budgets.
#[derive(Clone)]
pub struct MockLLMClient {
    script: Arc<Mutex<VecDeque<ScriptedReply>>>,
    fallback: String,
    should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockLLMClient {
    /// Create a client that returns `response` on every call.
    pub fn new(response: &str) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: response.to_string(),
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a client that plays back `replies` in order, then falls back
    /// to an empty response.
    pub fn scripted(replies: Vec<ScriptedReply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(replies.into())),
            fallback: String::new(),
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a client that always returns an error.
    pub fn failing() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: String::new(),
            should_fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of generate calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        let mut script = self.script.lock().expect("script lock");
        match script.pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Error(message)) => Err(AppError::LLM(message)),
            None => Ok(self.fallback.clone()),
        }
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.next()
    }

    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        self.next()
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
