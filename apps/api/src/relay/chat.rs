//! Chat assistant — answers a single visitor question about the profile.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::profile::Profile;
use crate::relay::prompts::{
    fill, CHAT_PROMPT_TEMPLATE, CONNECTION_ERROR_FALLBACK, EMPTY_RESPONSE_FALLBACK,
};
use crate::relay::TextGenerator;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub query: String,
    pub response: String,
}

pub fn build_chat_prompt(profile: &Profile, query: &str) -> String {
    let profile_json = profile.to_prompt_json();
    fill(
        CHAT_PROMPT_TEMPLATE,
        &[
            ("first_name", profile.first_name()),
            ("profile_json", profile_json.as_str()),
            ("query", query),
        ],
    )
}

/// Maps a generation outcome to the text shown to the visitor.
/// Every failure collapses to one of two fixed strings.
pub fn displayed_text(outcome: Result<String, LlmError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(LlmError::EmptyContent) => {
            warn!("Chat model returned no text");
            EMPTY_RESPONSE_FALLBACK.to_string()
        }
        Err(e) => {
            warn!("Chat relay failed: {e}");
            CONNECTION_ERROR_FALLBACK.to_string()
        }
    }
}

/// Relays one question. Empty input is rejected before any model call.
pub async fn ask(
    generator: &dyn TextGenerator,
    profile: &Profile,
    query: &str,
) -> Result<ChatReply, AppError> {
    if query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let prompt = build_chat_prompt(profile, query);
    let response = displayed_text(generator.generate(&prompt).await);
    info!("Chat relay answered ({} chars)", response.len());

    Ok(ChatReply {
        query: query.to_string(),
        response,
    })
}
