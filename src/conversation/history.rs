use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sentiment::SentimentRecord;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Persona / instructions.
    System,
    /// Message typed by the user.
    User,
    /// Generated reply.
    Assistant,
}

impl Role {
    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One turn of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Who wrote the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
    /// Judgment attached to a classified user turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentRecord>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now(),
            sentiment: None,
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a user message carrying its judgment
    pub fn user_with_sentiment(content: impl Into<String>, sentiment: SentimentRecord) -> Self {
        Self {
            sentiment: Some(sentiment),
            ..Self::new(Role::User, content)
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Append-only conversation transcript.
///
/// Index 0 always holds the system persona. [`reset`](Self::reset) is the only
/// operation that drops turns.
#[derive(Debug, Clone)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    /// Create a history holding only the persona
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(persona)],
        }
    }

    /// Append a turn at the end.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace every turn with a single system message holding `persona`.
    pub fn reset(&mut self, persona: impl Into<String>) {
        self.messages = vec![Message::system(persona)];
    }

    /// Swap the persona at index 0 for a fresh system message.
    pub fn set_persona(&mut self, persona: impl Into<String>) {
        self.messages[0] = Message::system(persona);
    }

    /// The active persona text.
    pub fn persona(&self) -> &str {
        &self.messages[0].content
    }

    /// All messages, persona first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages including the persona
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the persona is never removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Contents of the user turns, in order.
    pub fn user_messages(&self) -> Vec<&str> {
        self.by_role(Role::User)
            .map(|m| m.content.as_str())
            .collect()
    }

    /// Messages with the given role, in order
    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| m.role == role)
    }

    /// Number of messages with the given role
    pub fn count(&self, role: Role) -> usize {
        self.by_role(role).count()
    }

    /// The last `n` non-system turns, oldest first.
    pub fn recent(&self, n: usize) -> &[Message] {
        let turns = &self.messages[1..];
        &turns[turns.len().saturating_sub(n)..]
    }
}
