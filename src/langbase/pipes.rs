//! The two pipes the engine runs against and how they are provisioned.
//!
//! The reply pipe only carries the generic reply guidelines. The persona is
//! sent with every request, so a persona override never disagrees with what
//! is stored on Langbase.

use tracing::info;

use super::client::LangbaseClient;
use super::types::{CreatePipeRequest, Message};
use crate::config::PipeConfig;
use crate::error::{LangbaseError, LangbaseResult};
use crate::prompts::{REPLY_GUIDELINES_PROMPT, SENTIMENT_ANALYSIS_PROMPT};

/// Settings a pipe is upserted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeProfile {
    /// Human-readable pipe description.
    pub description: &'static str,
    /// System message the pipe is created with.
    pub system_prompt: &'static str,
    /// Whether the pipe forces JSON output.
    pub json_output: bool,
    /// Sampling temperature.
    pub temperature: f64,
    /// Completion token limit.
    pub max_tokens: u32,
}

/// Low-temperature JSON classifier.
pub const SENTIMENT_PROFILE: PipeProfile = PipeProfile {
    description: "Sentiment and emotion classification for conversation turns",
    system_prompt: SENTIMENT_ANALYSIS_PROMPT,
    json_output: true,
    temperature: 0.3,
    max_tokens: 500,
};

/// Free-text replies; the persona and mood line arrive per request.
pub const REPLY_PROFILE: PipeProfile = PipeProfile {
    description: "Mood-aware conversational replies",
    system_prompt: REPLY_GUIDELINES_PROMPT,
    json_output: false,
    temperature: 0.7,
    max_tokens: 2048,
};

impl PipeProfile {
    /// Upsert request creating pipe `name` on `model`
    pub fn create_request(&self, name: &str, model: &str) -> CreatePipeRequest {
        CreatePipeRequest::new(name)
            .with_description(self.description)
            .with_model(model)
            .with_upsert(true)
            .with_json_output(self.json_output)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_messages(vec![Message::system(self.system_prompt)])
    }
}

impl LangbaseClient {
    /// Upsert the sentiment and reply pipes named in `pipes`.
    pub async fn ensure_pipes(&self, pipes: &PipeConfig) -> LangbaseResult<()> {
        self.ensure_pipe(&pipes.sentiment, &SENTIMENT_PROFILE).await?;
        self.ensure_pipe(&pipes.reply, &REPLY_PROFILE).await
    }

    /// Upsert one pipe. A 409 means it already exists and counts as success.
    pub async fn ensure_pipe(&self, name: &str, profile: &PipeProfile) -> LangbaseResult<()> {
        let request = profile.create_request(name, self.model());

        match self.create_pipe(request).await {
            Ok(_) => {
                info!(pipe = %name, json = profile.json_output, "Pipe ready");
                Ok(())
            }
            Err(LangbaseError::Api { status: 409, .. }) => {
                info!(pipe = %name, "Pipe already exists");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
