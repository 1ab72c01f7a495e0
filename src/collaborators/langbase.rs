use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::{Classifier, ReplyContext, Responder};
use crate::config::Config;
use crate::conversation::Role;
use crate::error::{CollaboratorError, CollaboratorResult};
use crate::langbase::{LangbaseClient, Message, PipeRequest, SentimentResponse};
use crate::prompts::{REPLY_GUIDELINES_PROMPT, SENTIMENT_ANALYSIS_PROMPT};
use crate::sentiment::SentimentJudgment;

/// Reasoning attached to the fallback judgment for unparseable completions.
pub const UNPARSEABLE_REASONING: &str = "Unable to parse AI response, defaulting to neutral.";

/// Classifier backed by the Langbase sentiment pipe.
#[derive(Clone)]
pub struct LangbaseClassifier {
    langbase: LangbaseClient,
    pipe_name: String,
}

impl LangbaseClassifier {
    /// Create a classifier using the configured sentiment pipe
    pub fn new(langbase: LangbaseClient, config: &Config) -> Self {
        Self::with_pipe(langbase, &config.pipes.sentiment)
    }

    /// Create a classifier bound to an explicit pipe name
    pub fn with_pipe(langbase: LangbaseClient, pipe_name: impl Into<String>) -> Self {
        Self {
            langbase,
            pipe_name: pipe_name.into(),
        }
    }

    fn build_messages(&self, text: &str) -> Vec<Message> {
        vec![
            Message::system(SENTIMENT_ANALYSIS_PROMPT),
            Message::user(format!("MESSAGE: \"{}\"", text)),
        ]
    }
}

#[async_trait]
impl Classifier for LangbaseClassifier {
    async fn classify(&self, text: &str) -> CollaboratorResult<SentimentJudgment> {
        let start = Instant::now();
        let request = PipeRequest::new(&self.pipe_name, self.build_messages(text));
        let response = self.langbase.call_pipe(request).await?;

        let judgment = match SentimentResponse::from_completion(&response.completion) {
            Ok(parsed) => parsed.into_judgment(),
            Err(e) => {
                warn!(
                    pipe = %self.pipe_name,
                    error = %e,
                    "Unparseable sentiment completion, using neutral fallback"
                );
                SentimentJudgment::default().with_reasoning(UNPARSEABLE_REASONING)
            }
        };

        debug!(
            pipe = %self.pipe_name,
            sentiment = %judgment.sentiment,
            emotion = %judgment.emotion,
            confidence = judgment.confidence,
            latency_ms = start.elapsed().as_millis(),
            "Message classified"
        );

        Ok(judgment)
    }
}

/// Responder backed by the Langbase reply pipe.
#[derive(Clone)]
pub struct LangbaseResponder {
    langbase: LangbaseClient,
    pipe_name: String,
}

impl LangbaseResponder {
    /// Create a responder using the configured reply pipe
    pub fn new(langbase: LangbaseClient, config: &Config) -> Self {
        Self::with_pipe(langbase, &config.pipes.reply)
    }

    /// Create a responder bound to an explicit pipe name
    pub fn with_pipe(langbase: LangbaseClient, pipe_name: impl Into<String>) -> Self {
        Self {
            langbase,
            pipe_name: pipe_name.into(),
        }
    }

    fn build_messages(&self, context: &ReplyContext) -> Vec<Message> {
        let mut messages = Vec::with_capacity(context.recent_turns.len() + 2);

        messages.push(Message::system(format!(
            "{}\n\n{}\n\nCURRENT MOOD CONTEXT: {}",
            context.persona, REPLY_GUIDELINES_PROMPT, context.mood_context
        )));

        for turn in &context.recent_turns {
            match turn.role {
                Role::User => messages.push(Message::user(turn.content.clone())),
                Role::Assistant => messages.push(Message::assistant(turn.content.clone())),
                Role::System => {}
            }
        }

        messages.push(Message::user(context.user_message.clone()));
        messages
    }
}

#[async_trait]
impl Responder for LangbaseResponder {
    async fn reply(&self, context: &ReplyContext) -> CollaboratorResult<String> {
        let request = PipeRequest::new(&self.pipe_name, self.build_messages(context));
        let response = self.langbase.call_pipe(request).await?;

        let reply = response.completion.trim();
        if reply.is_empty() {
            return Err(CollaboratorError::Failed {
                message: format!("Pipe {} returned an empty reply", self.pipe_name),
            });
        }

        info!(
            pipe = %self.pipe_name,
            reply_chars = reply.chars().count(),
            "Reply generated"
        );

        Ok(reply.to_string())
    }
}
