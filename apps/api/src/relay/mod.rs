//! Prompt relay — forwards visitor text, merged with a fixed template and the
//! profile record, to the hosted model and shapes the answer for the page.
//!
//! `AppState` holds an `Arc<dyn TextGenerator>`; `LlmClient` is the default backend.

pub mod chat;
pub mod fit_check;
pub mod handlers;
pub mod prompts;

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};

/// Produces text for a fully rendered prompt. Implement this to swap backends
/// without touching the handlers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.call_text(prompt).await
    }
}
