//! Batch command-line interface.
//!
//! Two commands drive the engine without an interactive loop: `analyze`
//! classifies messages in isolation and `replay` runs a scripted conversation.
//! Both print one JSON document per line.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::collaborators::{Classifier, Responder};
use crate::conversation::ConversationEngine;
use crate::error::{AppError, AppResult};

/// Sentiment-aware conversation engine.
#[derive(Parser, Debug)]
#[command(name = "mood-engine", version)]
pub struct Cli {
    /// Persona used instead of the configured one
    #[arg(long, global = true)]
    pub persona: Option<String>,

    /// Batch command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Batch subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify messages without starting a conversation
    Analyze {
        /// Messages to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Run a conversation turn by turn and print the final statistics
    Replay {
        /// File with one user message per line (`#` starts a comment)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Messages sent after those read from the file
        texts: Vec<String>,
    },
}

/// Result of CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// JSON lines produced before completion or failure
    pub output: String,
    /// Failure description, if any
    pub error: Option<String>,
}

impl CliResult {
    fn finish(output: String, result: AppResult<()>) -> Self {
        match result {
            Ok(()) => Self {
                exit_code: 0,
                output,
                error: None,
            },
            Err(e) => Self {
                exit_code: 1,
                output,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Execute a batch command against a session.
pub async fn execute_command<C: Classifier, R: Responder>(
    command: Commands,
    engine: &mut ConversationEngine<C, R>,
) -> CliResult {
    let mut output = String::new();
    let result = match command {
        Commands::Analyze { texts } => execute_analyze(engine, &texts, &mut output).await,
        Commands::Replay { file, texts } => {
            execute_replay(engine, file.as_deref(), texts, &mut output).await
        }
    };
    CliResult::finish(output, result)
}

async fn execute_analyze<C: Classifier, R: Responder>(
    engine: &ConversationEngine<C, R>,
    texts: &[String],
    output: &mut String,
) -> AppResult<()> {
    for text in texts {
        let record = engine.analyze(text).await?;
        push_json(output, &record)?;
    }
    Ok(())
}

async fn execute_replay<C: Classifier, R: Responder>(
    engine: &mut ConversationEngine<C, R>,
    file: Option<&Path>,
    texts: Vec<String>,
    output: &mut String,
) -> AppResult<()> {
    let mut messages = match file {
        Some(path) => load_messages(path)?,
        None => Vec::new(),
    };
    messages.extend(texts);

    if messages.is_empty() {
        return Err(AppError::Config {
            message: "No messages to replay".to_string(),
        });
    }

    info!(turns = messages.len(), "Replaying conversation");

    for (index, text) in messages.iter().enumerate() {
        match engine.process_turn(text).await {
            Ok(outcome) => push_json(output, &outcome)?,
            Err(e) => {
                warn!(turn = index + 1, error = %e, "Replay stopped");
                return Err(e.into());
            }
        }
    }

    push_json(output, &engine.statistics())
}

/// Read replay messages from a file.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn load_messages(path: &Path) -> AppResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

fn push_json<T: Serialize>(output: &mut String, value: &T) -> AppResult<()> {
    let line = serde_json::to_string(value).map_err(|e| AppError::Internal {
        message: format!("Failed to serialize output: {}", e),
    })?;
    output.push_str(&line);
    output.push('\n');
    Ok(())
}
