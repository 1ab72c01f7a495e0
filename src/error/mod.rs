use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Langbase API failure
    #[error("Langbase error: {0}")]
    Langbase(#[from] LangbaseError),

    /// Conversation engine failure
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Langbase API errors
#[derive(Debug, Error)]
pub enum LangbaseError {
    /// All attempts failed
    #[error("Langbase unavailable: {message} (retries: {retries})")]
    Unavailable { message: String, retries: u32 },

    /// Non-success HTTP status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Request timed out
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors returned by external collaborators (classifier, responder)
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// Pipe call failed
    #[error("{0}")]
    Langbase(#[from] LangbaseError),

    /// Collaborator-specific failure
    #[error("{message}")]
    Failed { message: String },
}

/// Conversation engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Classifier returned an error; nothing recorded
    #[error("Classification failed: {0}")]
    Classification(#[source] CollaboratorError),

    /// Responder returned an error; turn discarded
    #[error("Reply generation failed: {0}")]
    Reply(#[source] CollaboratorError),

    /// Judgment failed validation
    #[error("Invalid judgment: {field} - {reason}")]
    InvalidJudgment { field: String, reason: String },

    /// User input rejected
    #[error("Validation failed: {field} - {reason}")]
    Validation { field: String, reason: String },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for Langbase operations
pub type LangbaseResult<T> = Result<T, LangbaseError>;

/// Result type alias for collaborator calls
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
