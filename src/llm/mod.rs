//! LLM Client
//!
//! Unified interface over external text-generation providers. The trait
//! seam lets tests substitute a mock backend for the real API.

use anyhow::Result;
use async_trait::async_trait;

pub mod openai_client;

pub use openai_client::OpenAiClient;

/// Client interface for chat-completion style LLM APIs
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Call the LLM with system + user prompts, return raw text response
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Get the model name for logging
    fn model_name(&self) -> &str;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}
