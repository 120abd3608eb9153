// Prompt templates for the relay widgets.
// Placeholders are substituted by `fill` in one pass over the template only.

/// Chat assistant template.
/// Replace: {first_name}, {profile_json}, {query}
pub const CHAT_PROMPT_TEMPLATE: &str = r#"You are {first_name}'s portfolio assistant. Resume Data: {profile_json}. User asks: "{query}". Keep it brief & professional."#;

/// Fit-check template.
/// Replace: {first_name}, {profile_json}, {jd_text}
pub const FIT_CHECK_PROMPT_TEMPLATE: &str = r#"Act as a recruiter. Compare {first_name}'s resume: {profile_json} against this JD: "{jd_text}". Provide a 3-bullet summary of why he fits. HTML format."#;

/// Shown in place of the answer when the model call fails outright.
pub const CONNECTION_ERROR_FALLBACK: &str = "Connection error. Please try again.";

/// Shown when the model answers but the answer carries no text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "I couldn't generate a response.";

/// Substitutes `{key}` placeholders in a single scan of `template`.
/// Substituted values are never rescanned; unknown `{...}` text is kept as-is.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
