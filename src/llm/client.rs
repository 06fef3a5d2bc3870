//! LLM client abstractions and provider selection.

use crate::types::Result;
use crate::utils::config::LLMConfig;
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction.
///
/// The conversation pipeline depends only on this trait, so providers can be
/// swapped without changing application code. Test suites substitute a
/// scripted implementation.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate with a system prompt.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection.
#[derive(Debug, Clone)]
pub enum Provider {
    /// OpenAI API provider (including compatible endpoints).
    OpenAI {
        /// Provider API key.
        api_key: String,
        /// API base URL.
        api_base: String,
        /// Model identifier.
        model: String,
    },
}

impl Provider {
    /// Build a provider from the model-provider configuration.
    pub fn from_config(config: &LLMConfig) -> Self {
        Provider::OpenAI {
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        }
    }

    /// Create a client instance for this provider.
    ///
    /// # Errors
    ///
    /// Returns [`crate::types::AppError::LLM`] when the provider was compiled
    /// out of the binary.
    pub fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            #[cfg(feature = "openai")]
            Provider::OpenAI {
                api_key,
                api_base,
                model,
            } => Ok(Box::new(super::openai::OpenAIClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
            ))),

            #[cfg(not(feature = "openai"))]
            Provider::OpenAI { model, .. } => Err(crate::types::AppError::LLM(format!(
                "OpenAI provider support was not compiled in (requested model: '{}'). \
                 Rebuild with the 'openai' feature enabled.",
                model
            ))),
        }
    }

    /// Get a human-readable name for this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI { .. } => "OpenAI",
        }
    }
}
