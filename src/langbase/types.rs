use serde::{Deserialize, Serialize};

use crate::sentiment::{Emotion, EmotionIntensity, Sentiment, SentimentJudgment};

/// Message in a Langbase conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message author
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

/// Message role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System prompt
    System,
    /// User input
    User,
    /// Model output
    Assistant,
}

/// Request to run a Langbase pipe
#[derive(Debug, Clone, Serialize)]
pub struct PipeRequest {
    /// Pipe name (required by Langbase API)
    pub name: String,
    /// Conversation sent to the pipe
    pub messages: Vec<Message>,
    /// Disable streaming (default: false for non-streaming response)
    #[serde(default)]
    pub stream: bool,
}

/// Response from a Langbase pipe.
///
/// Only the completion is consumed; thread ids and raw model details are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PipeResponse {
    /// Whether Langbase reports success
    #[serde(default)]
    pub success: bool,
    /// Generated text
    pub completion: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

impl PipeRequest {
    /// Create a new pipe request with name and messages
    pub fn new(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            messages,
            stream: false, // Disable streaming for synchronous responses
        }
    }
}

/// Sentiment classification as emitted by the sentiment pipe.
///
/// Every field is optional and loosely typed; [`into_judgment`](Self::into_judgment)
/// normalises it into a [`SentimentJudgment`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentResponse {
    /// Raw sentiment label
    #[serde(default)]
    pub sentiment: Option<String>,
    /// Number or numeric string
    #[serde(default)]
    pub confidence: Option<serde_json::Value>,
    /// Raw emotion label
    #[serde(default)]
    pub emotion: Option<String>,
    /// Raw intensity label
    #[serde(default)]
    pub emotion_intensity: Option<String>,
    /// Model's explanation
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl SentimentResponse {
    /// Parse a sentiment response from pipe completion text.
    ///
    /// Accepts raw JSON or JSON wrapped in a markdown code block.
    pub fn from_completion(completion: &str) -> Result<Self, String> {
        let json = super::extract_json_from_completion(completion)?;
        serde_json::from_str(json).map_err(|e| format!("Failed to parse sentiment JSON: {}", e))
    }

    /// Normalise into a judgment, substituting defaults for missing or
    /// out-of-domain fields and clamping confidence into `0.0..=1.0`.
    pub fn into_judgment(self) -> SentimentJudgment {
        let defaults = SentimentJudgment::default();

        let confidence = match self.confidence {
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|c| c.is_finite())
        .map(|c| c.clamp(0.0, 1.0))
        .unwrap_or(defaults.confidence);

        SentimentJudgment {
            sentiment: self
                .sentiment
                .and_then(|s| s.parse::<Sentiment>().ok())
                .unwrap_or(defaults.sentiment),
            confidence,
            emotion: self
                .emotion
                .and_then(|s| s.parse::<Emotion>().ok())
                .unwrap_or(defaults.emotion),
            emotion_intensity: self
                .emotion_intensity
                .and_then(|s| s.parse::<EmotionIntensity>().ok())
                .unwrap_or(defaults.emotion_intensity),
            reasoning: self
                .reasoning
                .filter(|r| !r.trim().is_empty())
                .unwrap_or(defaults.reasoning),
        }
    }
}

/// Request to create a new Langbase pipe
#[derive(Debug, Clone, Serialize)]
pub struct CreatePipeRequest {
    /// Pipe name
    pub name: String,
    /// Pipe description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Update the pipe if it already exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsert: Option<bool>,
    /// Force JSON output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Completion token limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Seed messages (system prompt)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}

/// Response from creating a pipe
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePipeResponse {
    /// Pipe name
    pub name: String,
    /// Pipe URL, when returned
    #[serde(default)]
    pub url: Option<String>,
}

impl CreatePipeRequest {
    /// Create a new pipe request with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            model: None,
            upsert: None,
            json: None,
            temperature: None,
            max_tokens: None,
            messages: None,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set model (e.g., "openai:gpt-4o-mini")
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Enable upsert (update if exists)
    pub fn with_upsert(mut self, upsert: bool) -> Self {
        self.upsert = Some(upsert);
        self
    }

    /// Enable JSON output mode
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json = Some(json);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set system/user messages
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = Some(messages);
        self
    }
}
