//! Config environment variable tests
//!
//! These tests verify that Config::from_env() correctly reads and applies
//! environment variable overrides. Config::from_env() also loads a .env file
//! via dotenvy, which never overrides variables already set here.
//!
//! Tests use #[serial] to prevent race conditions with shared env vars.

use conversation_mood_engine::config::{Config, LogFormat};
use conversation_mood_engine::prompts::DEFAULT_PERSONA;
use serial_test::serial;
use std::env;

fn with_api_key() {
    env::set_var("LANGBASE_API_KEY", "test-key");
}

#[test]
#[serial]
fn test_config_from_env_loads_successfully() {
    with_api_key();

    let config = Config::from_env().unwrap();

    assert_eq!(config.langbase.api_key, "test-key");
    assert_eq!(config.pipes.sentiment, "sentiment-analysis-v1");
    assert_eq!(config.pipes.reply, "empathetic-reply-v1");
    assert_eq!(config.conversation.persona, DEFAULT_PERSONA);
    assert_eq!(config.conversation.recent_mood_window, 3);
    assert_eq!(config.conversation.reply_context_turns, 10);
    assert_eq!(config.conversation.max_message_length, 10_000);
}

#[test]
#[serial]
fn test_config_from_env_missing_api_key() {
    let saved = env::var("LANGBASE_API_KEY").ok();
    env::remove_var("LANGBASE_API_KEY");

    let result = Config::from_env();

    if let Some(key) = saved {
        env::set_var("LANGBASE_API_KEY", key);
    }
    let err = result.unwrap_err();
    assert!(err.to_string().contains("LANGBASE_API_KEY is required"));
}

#[test]
#[serial]
fn test_config_from_env_custom_base_url_and_model() {
    with_api_key();
    env::set_var("LANGBASE_BASE_URL", "https://custom.api.com");
    env::set_var("LANGBASE_MODEL", "anthropic:claude-3-haiku");

    let config = Config::from_env().unwrap();
    assert_eq!(config.langbase.base_url, "https://custom.api.com");
    assert_eq!(config.langbase.model, "anthropic:claude-3-haiku");

    env::remove_var("LANGBASE_BASE_URL");
    env::remove_var("LANGBASE_MODEL");
}

#[test]
#[serial]
fn test_config_from_env_json_log_format() {
    with_api_key();
    env::set_var("LOG_FORMAT", "JSON");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_config_from_env_custom_request() {
    with_api_key();
    env::set_var("REQUEST_TIMEOUT_MS", "60000");
    env::set_var("MAX_RETRIES", "5");
    env::set_var("RETRY_DELAY_MS", "2000");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, 60000);
    assert_eq!(config.request.max_retries, 5);
    assert_eq!(config.request.retry_delay_ms, 2000);

    env::remove_var("REQUEST_TIMEOUT_MS");
    env::remove_var("MAX_RETRIES");
    env::remove_var("RETRY_DELAY_MS");
}

#[test]
#[serial]
fn test_config_from_env_invalid_numbers_use_defaults() {
    with_api_key();
    env::set_var("MAX_RETRIES", "many");
    env::set_var("RECENT_MOOD_WINDOW", "-2");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.max_retries, 3);
    assert_eq!(config.conversation.recent_mood_window, 3);

    env::remove_var("MAX_RETRIES");
    env::remove_var("RECENT_MOOD_WINDOW");
}

#[test]
#[serial]
fn test_config_from_env_conversation_overrides() {
    with_api_key();
    env::set_var("CONVERSATION_PERSONA", "You are a pirate.");
    env::set_var("RECENT_MOOD_WINDOW", "0");
    env::set_var("REPLY_CONTEXT_TURNS", "4");
    env::set_var("MAX_MESSAGE_LENGTH", "280");
    env::set_var("PIPE_SENTIMENT", "custom-sentiment");
    env::set_var("PIPE_REPLY", "custom-reply");

    let config = Config::from_env().unwrap();
    assert_eq!(config.conversation.persona, "You are a pirate.");
    assert_eq!(config.conversation.recent_mood_window, 1);
    assert_eq!(config.conversation.reply_context_turns, 4);
    assert_eq!(config.conversation.max_message_length, 280);
    assert_eq!(config.pipes.sentiment, "custom-sentiment");
    assert_eq!(config.pipes.reply, "custom-reply");

    for key in [
        "CONVERSATION_PERSONA",
        "RECENT_MOOD_WINDOW",
        "REPLY_CONTEXT_TURNS",
        "MAX_MESSAGE_LENGTH",
        "PIPE_SENTIMENT",
        "PIPE_REPLY",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_config_from_env_blank_persona_uses_default() {
    with_api_key();
    env::set_var("CONVERSATION_PERSONA", "   ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.conversation.persona, DEFAULT_PERSONA);

    env::remove_var("CONVERSATION_PERSONA");
}
