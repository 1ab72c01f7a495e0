//! External collaborators consumed by the conversation engine.
//!
//! The engine never classifies text or writes replies itself; it calls a
//! [`Classifier`] and a [`Responder`]. Langbase-backed implementations live in
//! [`langbase`].

mod langbase;

pub use langbase::{LangbaseClassifier, LangbaseResponder, UNPARSEABLE_REASONING};

use async_trait::async_trait;
use serde::Serialize;

use crate::conversation::Message;
use crate::error::CollaboratorResult;
use crate::sentiment::SentimentJudgment;

/// Produces a structured sentiment judgment for one message.
///
/// Implementations substitute defaults for malformed model output themselves;
/// `Err` means no judgment could be produced at all.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> CollaboratorResult<SentimentJudgment>;
}

/// Everything a responder needs to answer one user turn.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyContext {
    /// Active persona (system prompt).
    pub persona: String,
    /// Trailing turns before the current one, oldest first.
    pub recent_turns: Vec<Message>,
    /// One-line mood summary including the current turn.
    pub mood_context: String,
    /// The cleaned user message being answered.
    pub user_message: String,
}

/// Produces the assistant reply for a user turn.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(&self, context: &ReplyContext) -> CollaboratorResult<String>;
}
