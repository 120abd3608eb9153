//! Fit check — asks the model for a short recruiter-style comparison of the
//! profile against a pasted job description.
//!
//! The answer is returned as raw markup with code-fence markers removed.
//! It is NOT sanitized; callers rendering it inherit that trust decision.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::profile::Profile;
use crate::relay::prompts::{fill, FIT_CHECK_PROMPT_TEMPLATE};
use crate::relay::TextGenerator;

#[derive(Debug, Deserialize)]
pub struct FitCheckRequest {
    pub jd_text: String,
}

/// `analysis` is `None` whenever the model call failed; the panel stays empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitCheckReply {
    pub analysis: Option<String>,
}

pub fn build_fit_check_prompt(profile: &Profile, jd_text: &str) -> String {
    let profile_json = profile.to_prompt_json();
    fill(
        FIT_CHECK_PROMPT_TEMPLATE,
        &[
            ("first_name", profile.first_name()),
            ("profile_json", profile_json.as_str()),
            ("jd_text", jd_text),
        ],
    )
}

/// Removes every ```html marker, then every remaining ``` marker, anywhere in the text.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```html", "").replace("```", "")
}

/// Relays one job description. Empty input is rejected before any model call.
pub async fn analyze(
    generator: &dyn TextGenerator,
    profile: &Profile,
    jd_text: &str,
) -> Result<FitCheckReply, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let prompt = build_fit_check_prompt(profile, jd_text);
    let analysis = match generator.generate(&prompt).await {
        Ok(text) => {
            info!("Fit check answered ({} chars)", text.len());
            Some(strip_code_fences(&text))
        }
        Err(e) => {
            warn!("Fit check relay failed: {e}");
            None
        }
    };

    Ok(FitCheckReply { analysis })
}
