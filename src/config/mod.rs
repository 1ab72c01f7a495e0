use std::env;

use crate::error::AppError;
use crate::prompts::DEFAULT_PERSONA;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Langbase API settings
    pub langbase: LangbaseConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// HTTP timeout and retry settings
    pub request: RequestConfig,
    /// Pipe names
    pub pipes: PipeConfig,
    /// Per-session conversation settings
    pub conversation: ConversationConfig,
}

/// Langbase API configuration
#[derive(Debug, Clone)]
pub struct LangbaseConfig {
    /// API key (LANGBASE_API_KEY)
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Model used when upserting pipes (e.g. "openai:gpt-4o-mini")
    pub model: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable output
    Pretty,
    /// One JSON object per line
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Base backoff delay in milliseconds
    pub retry_delay_ms: u64,
}

/// Langbase pipe name configuration
#[derive(Debug, Clone)]
pub struct PipeConfig {
    /// Sentiment classification pipe
    pub sentiment: String,
    /// Reply generation pipe
    pub reply: String,
}

/// Per-session conversation settings
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationConfig {
    /// Persona placed at the head of every fresh history
    pub persona: String,
    /// Number of trailing judgments considered for the recent mood
    pub recent_mood_window: usize,
    /// Number of trailing turns handed to the responder
    pub reply_context_turns: usize,
    /// Longest accepted user message, in characters
    pub max_message_length: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let langbase = LangbaseConfig {
            api_key: env::var("LANGBASE_API_KEY").map_err(|_| AppError::Config {
                message: "LANGBASE_API_KEY is required".to_string(),
            })?,
            base_url: env::var("LANGBASE_BASE_URL")
                .unwrap_or_else(|_| "https://api.langbase.com".to_string()),
            model: env::var("LANGBASE_MODEL").unwrap_or_else(|_| "openai:gpt-4o-mini".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: parse_env("REQUEST_TIMEOUT_MS", 30000),
            max_retries: parse_env("MAX_RETRIES", 3),
            retry_delay_ms: parse_env("RETRY_DELAY_MS", 1000),
        };

        let pipes = PipeConfig {
            sentiment: env::var("PIPE_SENTIMENT")
                .unwrap_or_else(|_| "sentiment-analysis-v1".to_string()),
            reply: env::var("PIPE_REPLY").unwrap_or_else(|_| "empathetic-reply-v1".to_string()),
        };

        let defaults = ConversationConfig::default();
        let conversation = ConversationConfig {
            persona: env::var("CONVERSATION_PERSONA")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.persona),
            recent_mood_window: parse_env("RECENT_MOOD_WINDOW", defaults.recent_mood_window)
                .max(1),
            reply_context_turns: parse_env("REPLY_CONTEXT_TURNS", defaults.reply_context_turns),
            max_message_length: parse_env("MAX_MESSAGE_LENGTH", defaults.max_message_length),
        };

        Ok(Config {
            langbase,
            logging,
            request,
            pipes,
            conversation,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            recent_mood_window: 3,
            reply_context_turns: 10,
            max_message_length: 10_000,
        }
    }
}
