//! # Conversation Mood Engine
//!
//! A sentiment-aware conversation engine. Every user message is classified
//! (sentiment, emotion, intensity) before the assistant answers, and the
//! reply is generated with a summary of the user's mood in hand.
//!
//! ## Features
//!
//! - **Per-turn classification**: structured sentiment judgments with defaults for malformed model output
//! - **Mood tracking**: running conversation state, engagement level and mood-shift detection
//! - **Aggregates**: dominant sentiment/emotion, distributions and recent mood over a session
//! - **UI hints**: colour, icon and intensity per detected emotion
//! - **Batch CLI**: analyse messages or replay a scripted conversation
//!
//! ## Architecture
//!
//! ```text
//! CLI → ConversationEngine → Classifier / Responder → Langbase Pipes (HTTP)
//!              ↓
//!     History + SentimentStore (in memory)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use conversation_mood_engine::collaborators::{LangbaseClassifier, LangbaseResponder};
//! use conversation_mood_engine::conversation::ConversationEngine;
//! use conversation_mood_engine::langbase::LangbaseClient;
//! use conversation_mood_engine::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let langbase = LangbaseClient::new(&config.langbase, config.request.clone())?;
//!     let classifier = LangbaseClassifier::new(langbase.clone(), &config);
//!     let responder = LangbaseResponder::new(langbase, &config);
//!     let mut engine = ConversationEngine::new(classifier, responder, config.conversation);
//!     let outcome = engine.process_turn("I finally fixed the bug!").await?;
//!     println!("{}", outcome.reply);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Batch command-line interface.
pub mod cli;
/// Classifier and responder traits with Langbase-backed implementations.
pub mod collaborators;
/// Configuration management.
pub mod config;
/// Conversation sessions, mood state and presentation hints.
pub mod conversation;
/// Error types and result aliases for the application.
pub mod error;
/// Langbase API client and types for pipe communication.
pub mod langbase;
/// System prompts for Langbase pipes.
pub mod prompts;
/// Sentiment judgments, records and aggregation.
pub mod sentiment;

pub use config::Config;
pub use conversation::{ConversationEngine, TurnOutcome};
pub use error::{AppError, AppResult};
