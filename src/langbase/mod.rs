//! Langbase Pipes client and wire types.

mod client;
mod pipes;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

pub use client::LangbaseClient;
pub use pipes::{PipeProfile, REPLY_PROFILE, SENTIMENT_PROFILE};
pub use types::*;

/// Extract the JSON object from a completion string.
///
/// Markdown code fences are stripped first (```` ```json ```` before plain
/// ```` ``` ````), then the span from the first `{` to the last `}` is
/// returned. Text before or after the object is ignored.
pub(crate) fn extract_json_from_completion(completion: &str) -> Result<&str, String> {
    let body = strip_code_fence(completion)?;

    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&body[start..=end]),
        _ => Err(format!(
            "No JSON found in response. First 100 chars: '{}'",
            completion.chars().take(100).collect::<String>()
        )),
    }
}

fn strip_code_fence(completion: &str) -> Result<&str, String> {
    for fence in ["```json", "```"] {
        if completion.contains(fence) {
            return completion
                .split(fence)
                .nth(1)
                .and_then(|s| s.split("```").next())
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    format!("Found {} block but content was empty or malformed", fence)
                });
        }
    }
    Ok(completion.trim())
}
